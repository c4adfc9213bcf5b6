mod common;

use common::fixture;
use modbuild::cli::Cli;
use modbuild::run_with_cli;

#[test]
fn run_with_cli_lists_modules_successfully() {
    let fx = fixture(true, "");
    let cli = Cli {
        config: Some(fx.config.clone()),
        list: true,
        ..Cli::default()
    };

    run_with_cli(cli).expect("list should succeed");
}

#[test]
fn run_with_cli_runs_restart() {
    let fx = fixture(true, "");
    let cli = Cli {
        config: Some(fx.config.clone()),
        restart: true,
        ..Cli::default()
    };

    run_with_cli(cli).expect("restart should succeed");
}

#[test]
fn run_with_cli_propagates_builder_errors() {
    let fx = fixture(true, "");
    let cli = Cli {
        config: Some(fx.config.clone()),
        test_integration: vec!["missing_Foo.class".to_string()],
        ..Cli::default()
    };

    let err = run_with_cli(cli).unwrap_err();
    assert!(err.is_builder());
    assert_eq!(err.to_string(), "Module alias missing not found");
}

#[test]
fn run_with_cli_propagates_execution_errors() {
    let fx = fixture(true, "");
    let cli = Cli {
        config: Some(fx.config.clone()),
        custom: vec!["broken".to_string()],
        ..Cli::default()
    };

    let err = run_with_cli(cli).unwrap_err();
    assert!(matches!(err, modbuild::Error::Execution { code: 4, .. }));
}
