//! `PromptTable` lookup and rendering policy.

use pattern_registry::models::prompt::{
    MessageRole, PromptArgs, PromptArgumentSpec, PromptDescriptor, PromptRenderResult,
    RenderedMessage,
};
use pattern_registry::registry::{PromptTable, PromptTemplate};
use pattern_registry::AppError;

fn onboard_client() -> PromptDescriptor {
    let arguments = vec![
        PromptArgumentSpec::new("client_name", "Client organisation", true)
            .with_default("the client"),
        PromptArgumentSpec::new("project_type", "Kind of project", true).with_default("project"),
    ];
    let template = PromptTemplate::new("Onboarding plan for {{client_name}}", arguments.clone())
        .message(
            MessageRole::User,
            "Start a {{project_type}} engagement with {{client_name}}.",
        );
    PromptDescriptor::new("onboard_client", "Kick off a client", arguments, template)
}

fn greeting() -> PromptDescriptor {
    PromptDescriptor::new(
        "greeting",
        "Closure-rendered prompt",
        vec![PromptArgumentSpec::new("name", "Who to greet", false)],
        |args: &PromptArgs| PromptRenderResult {
            description: "Greeting".into(),
            messages: vec![RenderedMessage::assistant(format!(
                "Hi {}",
                args.get("name").map_or("there", String::as_str)
            ))],
        },
    )
}

fn args(pairs: &[(&str, &str)]) -> PromptArgs {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

#[test]
fn renders_provided_arguments() {
    let table = PromptTable::new(vec![onboard_client()]).expect("valid table");
    let rendered = table
        .render(
            "onboard_client",
            &args(&[("client_name", "Acme"), ("project_type", "dashboard")]),
        )
        .expect("renders");

    assert!(rendered.description.contains("Acme"));
    assert_eq!(rendered.messages.len(), 1);
    assert_eq!(rendered.messages[0].role, MessageRole::User);
    assert!(rendered.messages[0].text.contains("Acme"));
    assert!(rendered.messages[0].text.contains("dashboard"));
}

#[test]
fn substitutes_defaults_for_missing_required_arguments() {
    let table = PromptTable::new(vec![onboard_client()]).expect("valid table");
    let rendered = table
        .render("onboard_client", &PromptArgs::new())
        .expect("missing arguments never fail");

    assert_eq!(rendered.description, "Onboarding plan for the client");
    assert_eq!(
        rendered.messages[0].text,
        "Start a project engagement with the client."
    );
}

#[test]
fn ignores_undeclared_arguments() {
    let table = PromptTable::new(vec![onboard_client()]).expect("valid table");
    let with_extra = table
        .render(
            "onboard_client",
            &args(&[("client_name", "Acme"), ("budget", "1M")]),
        )
        .unwrap();
    let without = table
        .render("onboard_client", &args(&[("client_name", "Acme")]))
        .unwrap();
    assert_eq!(with_extra, without);
}

#[test]
fn closure_renderers_only_see_declared_arguments() {
    let table = PromptTable::new(vec![greeting()]).expect("valid table");
    let rendered = table
        .render("greeting", &args(&[("name", "Ada"), ("other", "x")]))
        .unwrap();
    assert_eq!(rendered.messages[0].text, "Hi Ada");
    assert_eq!(rendered.messages[0].role, MessageRole::Assistant);

    let fallback = table.render("greeting", &PromptArgs::new()).unwrap();
    assert_eq!(fallback.messages[0].text, "Hi there");
}

#[test]
fn unknown_prompt_is_not_found() {
    let table = PromptTable::new(vec![onboard_client()]).expect("valid table");
    let err = table
        .render("nonexistent_prompt", &PromptArgs::new())
        .expect_err("unknown");
    assert!(matches!(err, AppError::NotFound(_)));
    assert!(table.get("nonexistent_prompt").is_err());
}

#[test]
fn duplicate_prompt_names_are_rejected() {
    let err = PromptTable::new(vec![onboard_client(), onboard_client()]).expect_err("dup");
    match err {
        AppError::DuplicatePrompt(name) => assert_eq!(name, "onboard_client"),
        other => panic!("expected DuplicatePrompt, got {other:?}"),
    }
}

#[test]
fn list_all_preserves_order() {
    let table = PromptTable::new(vec![greeting(), onboard_client()]).expect("valid table");
    let names: Vec<&str> = table.list_all().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["greeting", "onboard_client"]);
    assert_eq!(table.len(), 2);
}

#[test]
fn argument_resolution_falls_back_to_angle_placeholder() {
    let spec = PromptArgumentSpec::new("topic", "", true);
    assert_eq!(spec.resolve(&PromptArgs::new()), "<topic>");
    assert_eq!(spec.resolve(&args(&[("topic", "")])), "");
}

#[test]
fn debug_output_omits_renderer() {
    let debug = format!("{:?}", onboard_client());
    assert!(debug.contains("onboard_client"));
    assert!(!debug.contains("renderer"));
}

#[test]
fn literal_braces_and_undeclared_placeholders_survive_rendering() {
    let arguments = vec![PromptArgumentSpec::new("client", "Client", true)];
    let template = PromptTemplate::new("For {{ client }}", arguments.clone()).message(
        MessageRole::User,
        "Use {{ braces for {{client}}; keep {{ other }} as is.",
    );
    let table = PromptTable::new(vec![PromptDescriptor::new(
        "braces",
        "Brace handling",
        arguments,
        template,
    )])
    .expect("valid table");

    let rendered = table
        .render("braces", &args(&[("client", "Acme")]))
        .expect("renders");
    assert_eq!(rendered.description, "For Acme");
    assert_eq!(
        rendered.messages[0].text,
        "Use {{ braces for Acme; keep {{ other }} as is."
    );
}
