//! CLI argument surface tests.
//!
//! The subcommand and flag names are a compatibility contract with scripts
//! written against the original gateway client, so every verb's argument
//! shape is pinned here.

use clap::Parser;
use fsgateway::cli::commands::association::AssociationAction;
use fsgateway::cli::commands::flavor_association::FlavorAssociationCommands;
use fsgateway::cli::commands::image_association::ImageAssociationCommands;
use fsgateway::cli::commands::network_association::NetworkAssociationCommands;
use fsgateway::cli::commands::project_association::ProjectAssociationCommands;
use fsgateway::cli::commands::subnet_association::SubnetAssociationCommands;
use fsgateway::cli::commands::user::UserCommands;
use fsgateway::cli::{Cli, Commands};

#[test]
fn parse_user_create() {
    let cli = Cli::try_parse_from([
        "fsgateway",
        "user",
        "create",
        "alice",
        "s3cret",
        "region-one",
        "--description",
        "test user",
    ])
    .unwrap();

    match cli.command {
        Commands::User(args) => match args.command {
            UserCommands::Create {
                name,
                password,
                region,
                description,
            } => {
                assert_eq!(name, "alice");
                assert_eq!(password, "s3cret");
                assert_eq!(region, "region-one");
                assert_eq!(description.as_deref(), Some("test user"));
            }
            _ => panic!("Wrong user command"),
        },
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn parse_user_create_description_is_optional() {
    let cli =
        Cli::try_parse_from(["fsgateway", "user", "create", "alice", "s3cret", "region-one"])
            .unwrap();

    match cli.command {
        Commands::User(args) => match args.command {
            UserCommands::Create { description, .. } => assert!(description.is_none()),
            _ => panic!("Wrong user command"),
        },
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn parse_user_update_uses_pass_flag() {
    let cli = Cli::try_parse_from([
        "fsgateway",
        "user",
        "update",
        "u-1",
        "--pass",
        "newpass",
        "--region",
        "region-two",
    ])
    .unwrap();

    match cli.command {
        Commands::User(args) => match args.command {
            UserCommands::Update {
                id,
                name,
                password,
                region,
                description,
            } => {
                assert_eq!(id, "u-1");
                assert!(name.is_none());
                assert_eq!(password.as_deref(), Some("newpass"));
                assert_eq!(region.as_deref(), Some("region-two"));
                assert!(description.is_none());
            }
            _ => panic!("Wrong user command"),
        },
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn parse_user_show_takes_name_or_id() {
    let cli = Cli::try_parse_from(["fsgateway", "user", "show", "alice"]).unwrap();
    match cli.command {
        Commands::User(args) => match args.command {
            UserCommands::Show { user } => assert_eq!(user, "alice"),
            _ => panic!("Wrong user command"),
        },
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn parse_project_association_create_requires_userid() {
    // Four positionals: hproject, project, userid, region.
    let cli = Cli::try_parse_from([
        "fsgateway",
        "project-association",
        "create",
        "hp-1",
        "p-1",
        "u-1",
        "region-one",
    ])
    .unwrap();

    match cli.command {
        Commands::ProjectAssociation(args) => {
            let action = args.command.into_action();
            assert_eq!(
                action,
                AssociationAction::Create {
                    cascading: "hp-1".to_string(),
                    cascaded: "p-1".to_string(),
                    region: "region-one".to_string(),
                    userid: Some("u-1".to_string()),
                }
            );
        }
        _ => panic!("Wrong top-level command"),
    }

    // Missing userid must be a parse error.
    let missing = Cli::try_parse_from([
        "fsgateway",
        "project-association",
        "create",
        "hp-1",
        "p-1",
        "region-one",
    ]);
    assert!(missing.is_err());
}

#[test]
fn parse_project_association_update_flags() {
    let cli = Cli::try_parse_from([
        "fsgateway",
        "project-association",
        "update",
        "a-1",
        "--hproject",
        "hp-2",
        "--userid",
        "u-2",
    ])
    .unwrap();

    match cli.command {
        Commands::ProjectAssociation(args) => match args.command {
            ProjectAssociationCommands::Update {
                id,
                hproject,
                project,
                region,
                userid,
            } => {
                assert_eq!(id, "a-1");
                assert_eq!(hproject.as_deref(), Some("hp-2"));
                assert!(project.is_none());
                assert!(region.is_none());
                assert_eq!(userid.as_deref(), Some("u-2"));
            }
            _ => panic!("Wrong subcommand"),
        },
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn parse_flavor_association_create_has_no_userid() {
    let cli = Cli::try_parse_from([
        "fsgateway",
        "flavor-association",
        "create",
        "hf-1",
        "f-1",
        "region-one",
    ])
    .unwrap();

    match cli.command {
        Commands::FlavorAssociation(args) => {
            match &args.command {
                FlavorAssociationCommands::Create { .. } => {}
                _ => panic!("Wrong subcommand"),
            }
            let action = args.command.into_action();
            assert_eq!(
                action,
                AssociationAction::Create {
                    cascading: "hf-1".to_string(),
                    cascaded: "f-1".to_string(),
                    region: "region-one".to_string(),
                    userid: None,
                }
            );
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn parse_flavor_association_update_rejects_userid_flag() {
    let result = Cli::try_parse_from([
        "fsgateway",
        "flavor-association",
        "update",
        "a-1",
        "--userid",
        "u-1",
    ]);
    assert!(result.is_err());
}

#[test]
fn parse_image_association_update_flags_are_kind_specific() {
    let cli = Cli::try_parse_from([
        "fsgateway",
        "image-association",
        "update",
        "a-9",
        "--himage",
        "hi-2",
        "--image",
        "i-2",
    ])
    .unwrap();

    match cli.command {
        Commands::ImageAssociation(args) => match args.command {
            ImageAssociationCommands::Update {
                id, himage, image, ..
            } => {
                assert_eq!(id, "a-9");
                assert_eq!(himage.as_deref(), Some("hi-2"));
                assert_eq!(image.as_deref(), Some("i-2"));
            }
            _ => panic!("Wrong subcommand"),
        },
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn parse_network_association_show() {
    let cli = Cli::try_parse_from(["fsgateway", "network-association", "show", "a-3"]).unwrap();
    match cli.command {
        Commands::NetworkAssociation(args) => match args.command {
            NetworkAssociationCommands::Show {
                network_association,
            } => assert_eq!(network_association, "a-3"),
            _ => panic!("Wrong subcommand"),
        },
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn parse_subnet_association_delete() {
    let cli = Cli::try_parse_from(["fsgateway", "subnet-association", "delete", "a-4"]).unwrap();
    match cli.command {
        Commands::SubnetAssociation(args) => match args.command {
            SubnetAssociationCommands::Delete { subnet_association } => {
                assert_eq!(subnet_association, "a-4");
            }
            _ => panic!("Wrong subcommand"),
        },
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn parse_version_list() {
    let cli = Cli::try_parse_from(["fsgateway", "version", "list"]).unwrap();
    assert!(matches!(cli.command, Commands::Version(_)));
}

#[test]
fn parse_global_flags() {
    let cli = Cli::try_parse_from([
        "fsgateway",
        "user",
        "list",
        "--json",
        "--endpoint",
        "http://gw:8776/v1",
        "--token",
        "tok",
    ])
    .unwrap();

    assert!(cli.json);
    assert_eq!(cli.endpoint.as_deref(), Some("http://gw:8776/v1"));
    assert_eq!(cli.token.as_deref(), Some("tok"));
}
