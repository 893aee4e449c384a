use crate::{Cli, Commands};

use clap::Parser;
use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};

#[test]
fn given_services_without_flags_when_parse_then_defaults_to_all() {
    // When
    let cli = Cli::try_parse_from(["gp", "services"]).unwrap();

    // Then
    match cli.command {
        Commands::Services {
            query,
            category,
            status,
            tab,
        } => {
            assert_eq!(query, "");
            assert_eq!(category, "all");
            assert_eq!(status, "all");
            assert_that!(tab, eq(0));
        }
        other => panic!("Expected Services, got {other:?}"),
    }
}

#[test]
fn given_register_without_role_when_parse_then_citizen() {
    let cli = Cli::try_parse_from([
        "gp",
        "register",
        "--name",
        "Jane Roe",
        "--email",
        "jane@example.com",
        "--password",
        "password1",
        "--confirm-password",
        "password1",
    ])
    .unwrap();

    match cli.command {
        Commands::Register { role, .. } => assert_eq!(role, "citizen"),
        other => panic!("Expected Register, got {other:?}"),
    }
}

#[test]
fn given_register_as_admin_when_parse_then_rejected() {
    let result = Cli::try_parse_from([
        "gp",
        "register",
        "--name",
        "Jane Roe",
        "--email",
        "jane@example.com",
        "--password",
        "password1",
        "--confirm-password",
        "password1",
        "--role",
        "admin",
    ]);

    assert_that!(result.map(|_| ()), err(anything()));
}

#[test]
fn given_demo_login_role_when_parse_then_ok() {
    assert_that!(
        Cli::try_parse_from(["gp", "demo-login", "officer"]).map(|_| ()),
        ok(anything())
    );
    assert_that!(
        Cli::try_parse_from(["gp", "demo-login", "mayor"]).map(|_| ()),
        err(anything())
    );
}

#[test]
fn given_pretty_after_subcommand_when_parse_then_global_flag_set() {
    let cli = Cli::try_parse_from(["gp", "stats", "--pretty"]).unwrap();

    assert_that!(cli.pretty, eq(true));
}
