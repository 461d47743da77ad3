use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    pub fn validate_movie_title(title: &str) -> Result<(), AppError> {
        if title.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Title cannot be empty".to_string(),
            ));
        }
        if title.len() > 255 {
            return Err(AppError::ValidationError(
                "Title too long (max 255 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_actor_name(first_name: &str, last_name: &str) -> Result<(), AppError> {
        if first_name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "First name cannot be empty".to_string(),
            ));
        }
        if last_name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Last name cannot be empty".to_string(),
            ));
        }
        if first_name.len() > 100 || last_name.len() > 100 {
            return Err(AppError::ValidationError(
                "Name too long (max 100 characters)".to_string(),
            ));
        }
        Ok(())
    }
}
