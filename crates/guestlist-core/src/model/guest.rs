use serde::{Deserialize, Serialize};

/// Guest - one invitee and their RSVP answer
///
/// Rows are looked up by `(first_name, last_name)`. The pair is not unique;
/// when several rows share it, the one with the lowest `id` is "the" guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    /// Surrogate key assigned by the store on insert
    pub id: i64,

    pub first_name: String,

    pub last_name: String,

    /// `None` until an RSVP is recorded
    pub rsvp_status: Option<bool>,
}

impl Guest {
    /// Create a Guest with no RSVP recorded
    pub fn new(id: i64, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            rsvp_status: None,
        }
    }

    /// Check whether this guest has answered at all
    pub fn has_responded(&self) -> bool {
        self.rsvp_status.is_some()
    }

    /// Check whether this guest has said they will attend
    pub fn is_attending(&self) -> bool {
        self.rsvp_status == Some(true)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_guest_has_no_rsvp() {
        let guest = Guest::new(1, "Grace", "Hopper");
        assert_eq!(guest.rsvp_status, None);
        assert!(!guest.has_responded());
        assert!(!guest.is_attending());
    }

    #[test]
    fn test_declined_guest_has_responded_but_not_attending() {
        let mut guest = Guest::new(1, "Grace", "Hopper");
        guest.rsvp_status = Some(false);
        assert!(guest.has_responded());
        assert!(!guest.is_attending());
    }

    #[test]
    fn test_full_name() {
        let guest = Guest::new(7, "Grace", "Hopper");
        assert_eq!(guest.full_name(), "Grace Hopper");
    }

    #[test]
    fn test_serializes_with_null_rsvp() {
        let guest = Guest::new(3, "Grace", "Hopper");
        let json = serde_json::to_value(&guest).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "first_name": "Grace",
                "last_name": "Hopper",
                "rsvp_status": null,
            })
        );
    }
}
