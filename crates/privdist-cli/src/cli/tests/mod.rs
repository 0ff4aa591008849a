use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_resolve() {
    match parse(&["privdist", "resolve", "https://example.com/?k={%KEY_FOO}"]).command {
        CliCommand::Resolve { input } => assert_eq!(input, "https://example.com/?k={%KEY_FOO}"),
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_inject_version() {
    match parse(&["privdist", "inject-version", "https://example.com/d", "1.2.3"]).command {
        CliCommand::InjectVersion { url, version } => {
            assert_eq!(url, "https://example.com/d");
            assert_eq!(version, "1.2.3");
        }
        _ => panic!("expected InjectVersion"),
    }
}

#[test]
fn cli_parse_rewrite_defaults() {
    match parse(&["privdist", "rewrite", "https://example.com/d"]).command {
        CliCommand::Rewrite {
            url,
            json,
            transport,
        } => {
            assert_eq!(url, "https://example.com/d");
            assert!(!json);
            assert!(!transport.tls_disabled);
            assert!(transport.cafile.is_none());
            assert!(transport.proxy.is_none());
            assert!(transport.headers.is_empty());
        }
        _ => panic!("expected Rewrite"),
    }
}

#[test]
fn cli_parse_rewrite_transport_options() {
    let cli = parse(&[
        "privdist",
        "rewrite",
        "https://example.com/d?key={%KEY_FOO}",
        "--json",
        "--tls-disabled",
        "--proxy",
        "http://proxy:3128",
        "--header",
        "Authorization=Bearer x",
        "--header",
        "X-Trace=1",
    ]);
    match cli.command {
        CliCommand::Rewrite {
            json, transport, ..
        } => {
            assert!(json);
            assert!(transport.tls_disabled);
            assert_eq!(transport.proxy.as_deref(), Some("http://proxy:3128"));
            assert_eq!(
                transport.headers,
                vec![
                    ("Authorization".to_string(), "Bearer x".to_string()),
                    ("X-Trace".to_string(), "1".to_string()),
                ]
            );
        }
        _ => panic!("expected Rewrite"),
    }
}

#[test]
fn cli_parse_rewrite_rejects_bad_header() {
    assert!(Cli::try_parse_from(["privdist", "rewrite", "u", "--header", "novalue"]).is_err());
}

#[test]
fn cli_parse_check_with_env_file() {
    let cli = parse(&["privdist", "check", "{%A}", "--env-file", "/srv/app/.env.local"]);
    assert_eq!(cli.env_file, Some(PathBuf::from("/srv/app/.env.local")));
    match cli.command {
        CliCommand::Check { input } => assert_eq!(input, "{%A}"),
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["privdist", "completions", "bash"]).command {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}

#[test]
fn completions_do_not_need_config() {
    assert!(!parse(&["privdist", "completions", "zsh"]).command.needs_config());
    assert!(parse(&["privdist", "resolve", "{%A}"]).command.needs_config());
    assert!(parse(&["privdist", "check", "{%A}"]).command.needs_config());
    assert!(parse(&["privdist", "rewrite", "https://example.com/d"]).command.needs_config());
}
