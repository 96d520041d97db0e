#[cfg(test)]
mod integration_tests {
    use crate::cli::commands::change_password::change_password_with;
    use crate::cli::commands::create_superuser::create_superuser_with;
    use crate::cli::commands::create_user::create_user_with;
    use crate::cli::commands::init_database;
    use crate::cli::commands::show_user::render_user;
    use crate::test_utils::test_utils::setup_test_manager;
    use model::UserError;

    #[tokio::test]
    async fn test_init_database() {
        init_database("sqlite::memory:").await.unwrap();
    }

    #[tokio::test]
    async fn test_create_user_command() {
        let manager = setup_test_manager().await;

        let user = create_user_with(&manager, "+15551234567", None, None, Some("p@ss"))
            .await
            .unwrap();

        assert_eq!(user.to_string(), "+15551234567");
        assert!(!user.is_active);
        assert!(!user.is_staff);
        assert!(!user.is_superuser);
        assert_ne!(user.password, "p@ss");
    }

    #[tokio::test]
    async fn test_create_user_command_rejects_empty_phone() {
        let manager = setup_test_manager().await;

        let err = create_user_with(&manager, "", None, None, Some("p@ss"))
            .await
            .unwrap_err();

        assert!(matches!(err.downcast_ref::<UserError>(), Some(UserError::MissingPhoneNumber)));
        assert!(render_user(&manager, "+15551234567").await.is_err());
    }

    #[tokio::test]
    async fn test_create_superuser_command() {
        let manager = setup_test_manager().await;

        let user = create_superuser_with(
            &manager,
            "+15551234567",
            "root",
            Some("root@Example.com"),
            Some("p@ss"),
        )
        .await
        .unwrap();

        assert!(user.is_active);
        assert!(user.is_staff);
        assert!(user.is_superuser);
        assert_eq!(user.username.as_deref(), Some("root"));
        assert_eq!(user.email.as_deref(), Some("root@example.com"));

        let authenticated = manager.authenticate("+15551234567", "p@ss").await.unwrap();
        assert_eq!(authenticated.map(|u| u.id), Some(user.id));
    }

    #[tokio::test]
    async fn test_create_superuser_command_rejects_blank_username() {
        let manager = setup_test_manager().await;

        let result =
            create_superuser_with(&manager, "+15551234567", "  ", None, Some("p@ss")).await;

        assert!(result.is_err());
        assert!(render_user(&manager, "+15551234567").await.is_err());
    }

    #[tokio::test]
    async fn test_duplicate_phone_number_command() {
        let manager = setup_test_manager().await;

        create_user_with(&manager, "+15551234567", None, None, Some("p@ss"))
            .await
            .unwrap();
        let err = create_superuser_with(&manager, "+1 555 123 4567", "root", None, Some("p@ss"))
            .await
            .unwrap_err();

        assert!(matches!(err.downcast_ref::<UserError>(), Some(UserError::Duplicate(_))));
    }

    #[tokio::test]
    async fn test_change_password_command() {
        let manager = setup_test_manager().await;
        let user = create_superuser_with(&manager, "+15551234567", "root", None, Some("old"))
            .await
            .unwrap();

        let updated = change_password_with(&manager, "+15551234567", "new").await.unwrap();

        assert_eq!(updated.id, user.id);
        assert!(manager.authenticate("+15551234567", "new").await.unwrap().is_some());
        assert!(manager.authenticate("+15551234567", "old").await.unwrap().is_none());
        assert_ne!(updated.activation_code, user.activation_code);
    }

    #[tokio::test]
    async fn test_change_password_unknown_user() {
        let manager = setup_test_manager().await;

        let err = change_password_with(&manager, "+15550000000", "new").await.unwrap_err();

        assert!(matches!(err.downcast_ref::<UserError>(), Some(UserError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_show_user_hides_password() {
        let manager = setup_test_manager().await;
        let user = create_user_with(
            &manager,
            "+15551234567",
            Some("a@example.com"),
            Some("alice"),
            Some("p@ss"),
        )
        .await
        .unwrap();

        let rendered = render_user(&manager, "+15551234567").await.unwrap();
        let body: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(body["id"], user.id);
        assert_eq!(body["phone_number"], "+15551234567");
        assert_eq!(body["username"], "alice");
        assert_eq!(body["email"], "a@example.com");
        assert_eq!(body["is_active"], false);
        assert_eq!(body["has_usable_password"], true);
        assert_eq!(body["activation_code"], user.activation_code);
        assert!(body.get("password").is_none());
        assert!(!rendered.contains(&user.password));
    }
}
