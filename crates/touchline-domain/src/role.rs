//! Portal roles and the static role → permission table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Portal role of an authenticated user.
///
/// Wire format: lowercase string (`"admin"`, `"coach"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Coach,
    Player,
    Media,
    Fan,
}

/// A single capability granted by a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ViewDashboard,
    ManageRoster,
    ManageSchedule,
    UploadMedia,
    ViewMedia,
    ManageMedia,
    SendMessages,
    ViewMessages,
    EditProfile,
    ManageUsers,
    ViewAnalytics,
    ScoutPlayers,
}

const ADMIN: &[Permission] = &[
    Permission::ViewDashboard,
    Permission::ManageRoster,
    Permission::ManageSchedule,
    Permission::UploadMedia,
    Permission::ViewMedia,
    Permission::ManageMedia,
    Permission::SendMessages,
    Permission::ViewMessages,
    Permission::EditProfile,
    Permission::ManageUsers,
    Permission::ViewAnalytics,
    Permission::ScoutPlayers,
];

const COACH: &[Permission] = &[
    Permission::ViewDashboard,
    Permission::ManageRoster,
    Permission::ManageSchedule,
    Permission::UploadMedia,
    Permission::ViewMedia,
    Permission::ManageMedia,
    Permission::SendMessages,
    Permission::ViewMessages,
    Permission::EditProfile,
    Permission::ViewAnalytics,
    Permission::ScoutPlayers,
];

const PLAYER: &[Permission] = &[
    Permission::ViewDashboard,
    Permission::ViewMedia,
    Permission::SendMessages,
    Permission::ViewMessages,
    Permission::EditProfile,
    Permission::ViewAnalytics,
];

const MEDIA: &[Permission] = &[
    Permission::ViewDashboard,
    Permission::UploadMedia,
    Permission::ViewMedia,
    Permission::ManageMedia,
    Permission::SendMessages,
    Permission::ViewMessages,
    Permission::EditProfile,
];

const FAN: &[Permission] = &[Permission::ViewMedia, Permission::EditProfile];

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::Coach,
        Role::Player,
        Role::Media,
        Role::Fan,
    ];

    /// Fixed permission set for this role. Table lookup, no per-user overrides.
    pub fn permissions(self) -> &'static [Permission] {
        match self {
            Self::Admin => ADMIN,
            Self::Coach => COACH,
            Self::Player => PLAYER,
            Self::Media => MEDIA,
            Self::Fan => FAN,
        }
    }

    pub fn has_permission(self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }

    pub fn is_role(self, candidate: Role) -> bool {
        self == candidate
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Coach => "coach",
            Self::Player => "player",
            Self::Media => "media",
            Self::Fan => "fan",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownRole(s.to_owned()))
    }
}
