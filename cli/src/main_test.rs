use clap::CommandFactory;

use super::*;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn parses_resolve_with_flags_in_any_position() {
    let cli = Cli::try_parse_from(["planner-routes", "resolve", "/todos/5/", "--authenticated", "--json"]).unwrap();
    assert!(cli.json);
    match cli.command {
        Command::Resolve { path, authenticated } => {
            assert_eq!(path, "/todos/5/");
            assert!(authenticated);
        }
        Command::Table => panic!("expected resolve"),
    }
}

#[test]
fn resolve_requires_a_path() {
    assert!(Cli::try_parse_from(["planner-routes", "resolve"]).is_err());
}

#[tokio::test]
async fn resolve_runs_against_the_library_table() {
    run_resolve(&RouterConfig::default(), "/notes/3/", false, true).await.unwrap();
    run_table(true).unwrap();
}
