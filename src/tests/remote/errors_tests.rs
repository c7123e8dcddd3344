    use super::*;

    #[test]
    fn validation_message_prefers_non_field_errors() {
        let v = serde_json::json!({
            "detail": "ignored",
            "name": ["also ignored"],
            "non_field_errors": ["A folder with this name already exists."]
        });
        assert_eq!(
            validation_message(&v).as_deref(),
            Some("A folder with this name already exists.")
        );
    }

    #[test]
    fn validation_message_falls_back_to_detail_then_field() {
        let v = serde_json::json!({ "detail": "Not found." });
        assert_eq!(validation_message(&v).as_deref(), Some("Not found."));

        let v = serde_json::json!({ "name": ["This field may not be blank."] });
        assert_eq!(
            validation_message(&v).as_deref(),
            Some("name: This field may not be blank.")
        );
    }

    #[test]
    fn validation_message_ignores_unstructured_bodies() {
        assert_eq!(validation_message(&serde_json::json!("boom")), None);
        assert_eq!(validation_message(&serde_json::json!({ "name": [] })), None);
    }

    #[test]
    fn user_message_reads_through_context() {
        let err = anyhow::Error::new(RemoteFailure::Validation("bad name".to_string()))
            .context("create folder");
        assert_eq!(user_message(&err), "bad name");

        let err = anyhow::Error::new(RemoteFailure::Unreachable("connect refused".to_string()))
            .context("fetch tree");
        assert_eq!(user_message(&err), "cannot reach server");

        let err = anyhow::Error::new(RemoteFailure::Rejected {
            status: 500,
            message: "oops".to_string(),
        });
        assert_eq!(user_message(&err), GENERIC_FAILURE);

        assert_eq!(user_message(&anyhow::anyhow!("plain")), GENERIC_FAILURE);
    }
