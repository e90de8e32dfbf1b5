use crate::domain::error::ErrorResponse;
use crate::domain::error::ErrorResponse::MissingFolderParam;
use url::form_urlencoded;

/// Pull the `folder` parameter out of a raw query string, form-decoded
/// (`%20` and `+` are spaces). Absent query, absent parameter and empty
/// value are all the same client error.
pub fn decode_folder(opt_query: Option<&str>) -> Result<String, ErrorResponse> {
    let query = opt_query.unwrap_or("");
    let folder = form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "folder")
        .map(|(_, value)| value.into_owned());

    match folder {
        Some(folder) if !folder.is_empty() => Ok(folder),
        _ => Err(MissingFolderParam {}),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_folder_param() {
        assert_eq!(decode_folder(Some("folder=photos")).unwrap(), "photos");
    }

    #[test]
    fn decodes_folder_among_other_params() {
        assert_eq!(decode_folder(Some("x=1&folder=photos&y=2")).unwrap(), "photos");
    }

    #[test]
    fn decodes_percent_encoded_value() {
        assert_eq!(decode_folder(Some("folder=my%20photos")).unwrap(), "my photos");
    }

    #[test]
    fn decodes_plus_as_space() {
        assert_eq!(decode_folder(Some("folder=my+photos")).unwrap(), "my photos");
    }

    #[test]
    fn rejects_absent_query() {
        assert!(decode_folder(None).is_err());
    }

    #[test]
    fn rejects_missing_param() {
        assert!(decode_folder(Some("width=300")).is_err());
    }

    #[test]
    fn rejects_empty_value() {
        assert!(decode_folder(Some("folder=")).is_err());
    }
}
