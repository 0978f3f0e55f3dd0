use crate::server::response::ApiError;

const MAX_VIRTUALIZATION_NAME_LEN: usize = 64;
const MAX_VIEW_NAME_LEN: usize = 255;

fn is_valid_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn validate_name(
    name: &str,
    entity: &str,
    max_len: usize,
    allow_hyphen: bool,
) -> Result<(), String> {
    if name.is_empty() {
        return Err(format!("{entity} name cannot be empty"));
    }
    if name.len() > max_len {
        return Err(format!("{entity} name cannot exceed {max_len} characters"));
    }
    if !name
        .chars()
        .all(|c| is_valid_name_char(c) && (allow_hyphen || c != '-'))
    {
        let allowed = if allow_hyphen {
            "alphanumeric characters, hyphens, and underscores"
        } else {
            "alphanumeric characters and underscores"
        };
        return Err(format!("{entity} name can only contain {allowed}"));
    }
    if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(format!("{entity} name must start with a letter"));
    }
    Ok(())
}

pub fn validate_virtualization_name(name: &str) -> Result<(), ApiError> {
    validate_name(name, "Virtualization", MAX_VIRTUALIZATION_NAME_LEN, true)
        .map_err(ApiError::bad_request)
}

/// View names become SQL identifiers, so hyphens are not allowed.
pub fn validate_view_name(name: &str) -> Result<(), ApiError> {
    validate_name(name, "View", MAX_VIEW_NAME_LEN, false).map_err(ApiError::bad_request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_virtualization_names() {
        assert!(validate_virtualization_name("testRoles").is_ok());
        assert!(validate_virtualization_name("sales-2024").is_ok());
        assert!(validate_virtualization_name("").is_err());
        assert!(validate_virtualization_name("_hidden").is_err());
        assert!(validate_virtualization_name("has space").is_err());
        assert!(validate_virtualization_name(&"a".repeat(65)).is_err());
    }

    #[test]
    fn test_view_names() {
        assert!(validate_view_name("myview").is_ok());
        assert!(validate_view_name("my_view_2").is_ok());
        assert!(validate_view_name("my-view").is_err());
        assert!(validate_view_name("1view").is_err());
    }
}
