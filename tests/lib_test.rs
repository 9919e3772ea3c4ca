//! Library integration tests.

use yaml2env::convert::{format_for_shell, yaml_to_env_vars, EnvVar};
use yaml2env::sink::{apply_env_vars, EnvSink, MemorySink};
use yaml2env::Yaml2EnvError;

#[test]
fn error_types_are_public() {
    let err = Yaml2EnvError::UnsupportedShell {
        shell: "fish".into(),
    };
    assert!(err.to_string().contains("fish"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> yaml2env::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use yaml2env::cli::Cli;

    let cli = Cli::parse_from(["yaml2env", "--shell", "cmd", "env.yml"]);
    assert_eq!(cli.shell, "cmd");
    assert!(cli.convert_args().is_some());
}

#[test]
fn convert_then_format_pipeline() {
    let vars = yaml_to_env_vars("server:\n  name: api\n  tags: [a, b]\n", "SVC").unwrap();
    let script = format_for_shell(&vars, "sh").unwrap();
    assert_eq!(
        script,
        "export SVC_SERVER_NAME='api'\nexport SVC_SERVER_TAGS_0='a'\nexport SVC_SERVER_TAGS_1='b'\n"
    );
}

#[test]
fn sequence_indices_at_every_depth() {
    let vars = yaml_to_env_vars("a:\n  - b:\n      - c: [x]\n", "").unwrap();
    assert_eq!(vars, vec![EnvVar::new("A_0_B_0_C_0", "x")]);
}

#[test]
fn duplicate_keys_last_write_wins_in_sink() {
    let vars = yaml_to_env_vars("my-key: first\nmy_key: second\n", "").unwrap();
    assert_eq!(vars.len(), 2);

    let mut sink = MemorySink::new();
    apply_env_vars(&vars, &mut [&mut sink as &mut dyn EnvSink]).unwrap();
    assert_eq!(sink.get("MY_KEY"), Some("second"));
}
