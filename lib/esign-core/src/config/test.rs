use secrecy::ExposeSecret;
use serde::Deserialize;

use super::core_config::AppConfig;

#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
struct TestAppConfig {
    port: u16,
    label: String,
}

#[test]
fn empty_input_yields_demo_defaults() {
    let config: AppConfig<TestAppConfig> = AppConfig::from_yaml(Vec::<&str>::new()).unwrap();

    assert_eq!(
        "https://signrequest.com/api/v1",
        config.core.provider.base_url.as_str()
    );
    assert!(config.core.provider.api_key.is_none());
    assert!(config.core.provider.template_id.is_empty());

    assert_eq!("test.signer@example.com", config.core.signer.email);
    assert_eq!("John", config.core.signer.first_name);
    assert_eq!("Doe", config.core.signer.last_name);
    assert_eq!("test-user-12345", config.core.signer.correlation_id);
    assert_eq!("test@example.com", config.core.signer.from_email);

    assert_eq!(TestAppConfig::default(), config.app);
}

#[test]
fn core_and_app_sections_are_extracted() {
    let config: AppConfig<TestAppConfig> = AppConfig::from_yaml([base_yaml()]).unwrap();

    assert_eq!(
        "secret-token",
        config
            .core
            .provider
            .api_key
            .as_ref()
            .unwrap()
            .expose_secret()
    );
    assert_eq!("tmpl-42", config.core.provider.template_id);
    assert_eq!("signer@acme.test", config.core.signer.email);

    assert_eq!(8080, config.app.port);
    assert_eq!("demo", config.app.label);
}

#[test]
fn later_documents_override_earlier_ones() {
    let config: AppConfig<TestAppConfig> =
        AppConfig::from_yaml([base_yaml(), "provider:\n  templateId: tmpl-override\n"]).unwrap();

    assert_eq!("tmpl-override", config.core.provider.template_id);
    // untouched values from the first document survive the merge
    assert_eq!(8080, config.app.port);
}

fn base_yaml() -> &'static str {
    r#"
provider:
  apiKey: secret-token
  templateId: tmpl-42
signer:
  email: signer@acme.test
app:
  port: 8080
  label: demo
"#
}
