//! The closed vocabulary of sidebar tabs the host renders.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A sidebar tab known to the host application.
///
/// Hidden-tab lists are stored as plain strings so that ids from newer host
/// versions survive a round trip; this enum is the set that has a visible
/// effect today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarTab {
    Chat,
    Combat,
    Scenes,
    Actors,
    Items,
    Journal,
    Tables,
    Cards,
    Playlists,
    Compendium,
    Settings,
    Macros,
}

impl SidebarTab {
    pub const ALL: [SidebarTab; 12] = [
        SidebarTab::Chat,
        SidebarTab::Combat,
        SidebarTab::Scenes,
        SidebarTab::Actors,
        SidebarTab::Items,
        SidebarTab::Journal,
        SidebarTab::Tables,
        SidebarTab::Cards,
        SidebarTab::Playlists,
        SidebarTab::Compendium,
        SidebarTab::Settings,
        SidebarTab::Macros,
    ];

    /// The `data-tab` id used by the host.
    pub fn id(self) -> &'static str {
        match self {
            SidebarTab::Chat => "chat",
            SidebarTab::Combat => "combat",
            SidebarTab::Scenes => "scenes",
            SidebarTab::Actors => "actors",
            SidebarTab::Items => "items",
            SidebarTab::Journal => "journal",
            SidebarTab::Tables => "tables",
            SidebarTab::Cards => "cards",
            SidebarTab::Playlists => "playlists",
            SidebarTab::Compendium => "compendium",
            SidebarTab::Settings => "settings",
            SidebarTab::Macros => "macros",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.id() == id)
    }
}

impl fmt::Display for SidebarTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
