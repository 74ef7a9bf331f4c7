use strum_macros::{AsRefStr, EnumIter};

/// Role ids as issued in the `role` claim by the identity service.
#[derive(Debug, Copy, Clone, Eq, PartialEq, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    Admin = 1,
    Hr = 2,
    Employee = 3,
    System = 4,
    ApiUser = 5,
}

impl Role {
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Role::Admin),
            2 => Some(Role::Hr),
            3 => Some(Role::Employee),
            4 => Some(Role::System),
            5 => Some(Role::ApiUser),
            _ => None,
        }
    }

    /// Attendance analytics expose per-employee absence data.
    pub fn can_read_analytics(self) -> bool {
        matches!(self, Role::Admin | Role::Hr)
    }
}
