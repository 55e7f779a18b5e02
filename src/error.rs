use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
}

// Display strings are the `detail` returned to clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,

    #[error("Activity is full")]
    ActivityFull,

    #[error("Participant not found in this activity")]
    ParticipantNotFound,
}

impl DirectoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DirectoryError::ActivityNotFound | DirectoryError::ParticipantNotFound => {
                ErrorKind::NotFound
            }
            DirectoryError::AlreadySignedUp | DirectoryError::ActivityFull => ErrorKind::Conflict,
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(DirectoryError::ActivityNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(DirectoryError::ParticipantNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(DirectoryError::AlreadySignedUp.kind(), ErrorKind::Conflict);
        assert_eq!(DirectoryError::ActivityFull.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn messages() {
        assert_eq!(DirectoryError::ActivityNotFound.to_string(), "Activity not found");
        assert!(DirectoryError::ActivityFull.to_string().contains("full"));
        assert!(DirectoryError::AlreadySignedUp
            .to_string()
            .contains("already signed up"));
    }
}
