//! Optional keyframe animations for slots toggled by class.
//!
//! Hosts that add `rnk-hidden` / `rnk-visible` to a slot while it changes
//! state get a fade with a slight lift instead of the plain transition.

/// Class marking a slot that is fading out.
pub const HIDDEN_CLASS: &str = "rnk-hidden";
/// Class marking a slot that is fading in.
pub const VISIBLE_CLASS: &str = "rnk-visible";

/// Keyframe block parameterised by the transition duration in milliseconds.
pub fn keyframes_css(duration: u32) -> String {
    let easing = "cubic-bezier(0.4, 0, 0.2, 1)";
    format!(
        r#"#hotbar .macro,
#hotbar li[data-slot],
#hotbar .bar-controls {{
  transition: opacity {duration}ms {easing}, transform {duration}ms {easing}, visibility {duration}ms {easing} !important;
}}

#hotbar .macro.{HIDDEN_CLASS},
#hotbar li[data-slot].{HIDDEN_CLASS} {{
  animation: rnk-fade-out {duration}ms ease-in-out forwards;
}}

#hotbar .macro.{VISIBLE_CLASS},
#hotbar li[data-slot].{VISIBLE_CLASS} {{
  animation: rnk-fade-in {duration}ms ease-in-out forwards;
}}

@keyframes rnk-fade-out {{
  0% {{
    opacity: 1;
    transform: scale(1) translateY(0);
  }}
  50% {{
    transform: scale(0.95) translateY(-5px);
  }}
  100% {{
    opacity: 0;
    transform: scale(0.8) translateY(0);
    visibility: hidden;
    pointer-events: none;
  }}
}}

@keyframes rnk-fade-in {{
  0% {{
    opacity: 0;
    transform: scale(0.8) translateY(0);
  }}
  50% {{
    transform: scale(1.05) translateY(-5px);
  }}
  100% {{
    opacity: 1;
    transform: scale(1) translateY(0);
  }}
}}

#hotbar .macro:not(.{HIDDEN_CLASS}):hover {{
  animation: rnk-pulse 0.3s ease-in-out;
}}

@keyframes rnk-pulse {{
  0%, 100% {{
    transform: scale(1);
  }}
  50% {{
    transform: scale(1.1);
  }}
}}
"#
    )
}
