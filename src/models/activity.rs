use serde::Serialize;

use crate::error::DirectoryError;

// One extracurricular offering. Field names are the JSON wire names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(description: &str, schedule: &str, max_participants: usize) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants(mut self, emails: &[&str]) -> Self {
        for email in emails {
            if !self.has_participant(email) {
                self.participants.push((*email).to_string());
            }
        }
        self
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    /// Appends `email` to the participant list.
    ///
    /// A duplicate is reported before capacity, so a member of a full
    /// activity gets `AlreadySignedUp`, not `ActivityFull`.
    pub fn admit(&mut self, email: &str) -> Result<(), DirectoryError> {
        if self.has_participant(email) {
            return Err(DirectoryError::AlreadySignedUp);
        }
        if self.is_full() {
            return Err(DirectoryError::ActivityFull);
        }
        self.participants.push(email.to_string());
        Ok(())
    }

    pub fn release(&mut self, email: &str) -> Result<(), DirectoryError> {
        let Some(pos) = self.participants.iter().position(|p| p == email) else {
            return Err(DirectoryError::ParticipantNotFound);
        };
        self.participants.remove(pos);
        Ok(())
    }
}
