use anyhow::Context;

use freeipa_client::{Client, SslVerify};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use serde_json::{Map, Value};
use tracing::{error, metadata::LevelFilter};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: freeipa-cli <server> [--no-verify | --ca-bundle <path>]";

fn setup_logger() -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env()
        // Set the base level when not matched by other directives to WARN.
        .add_directive(LevelFilter::WARN.into())
        .add_directive("freeipa_client=debug".parse()?)
        .add_directive("freeipa_cli=debug".parse()?);

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(filter)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    Ok(())
}

fn print_result(result: freeipa_client::Result<Value>) {
    match result {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(pretty) => println!("{}", pretty),
            Err(e) => error!("{:?}", e),
        },
        Err(e) => error!("{:?}", e),
    }
}

fn main() -> anyhow::Result<()> {
    setup_logger()?;

    let mut args = std::env::args().skip(1);
    let server = args.next().context(USAGE)?;
    let sslverify = match (args.next().as_deref(), args.next()) {
        (None, _) => SslVerify::Enabled,
        (Some("--no-verify"), None) => SslVerify::Disabled,
        (Some("--ca-bundle"), Some(path)) => SslVerify::CaBundle(path.into()),
        _ => anyhow::bail!(USAGE),
    };

    let mut client = Client::new(&server, sslverify)?;

    let mut rl = DefaultEditor::new()?;
    if rl.load_history("history.txt").is_err() {
        println!("No previous history.");
    }
    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                match *line.split_ascii_whitespace().collect::<Vec<_>>().as_slice() {
                    ["login", user, password] => match client.login(user, password) {
                        Ok(Some(_)) => println!("logged in as {}", user),
                        Ok(None) => println!("login failed"),
                        Err(e) => error!("{:?}", e),
                    },
                    ["whoami"] => match client.principal() {
                        Some(user) => println!("{}", user),
                        None => println!("not logged in"),
                    },
                    ["config-show"] => print_result(client.config_show()),
                    ["user-show", uid] => print_result(client.user_show(uid)),
                    ["user-status", uid] => print_result(client.user_status(uid)),
                    ["user-find"] => print_result(client.user_find(None, Map::new(), None)),
                    ["user-find", uid] => {
                        print_result(client.user_find(Some(uid), Map::new(), None))
                    }
                    ["group-show", cn] => print_result(client.group_show(cn)),
                    ["group-find"] => print_result(client.group_find(None, None)),
                    ["group-find", cn] => print_result(client.group_find(Some(cn), None)),
                    ["host-show", fqdn] => print_result(client.host_show(fqdn)),
                    ["host-find"] => print_result(client.host_find(None, None, None)),
                    ["call", method] => print_result(client.call(method, Vec::new(), Map::new())),
                    ["call", method, item, options] => {
                        match (
                            serde_json::from_str::<Vec<Value>>(item),
                            serde_json::from_str::<Map<String, Value>>(options),
                        ) {
                            (Ok(item), Ok(options)) => {
                                print_result(client.call(method, item, options))
                            }
                            _ => error!(
                                "item and options must be JSON without spaces, \
                                 e.g. call user_show [\"alice\"] {{\"all\":true}}"
                            ),
                        }
                    }
                    [] => {}
                    _ => {
                        error!("unknown command");
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    rl.save_history("history.txt")?;
    Ok(())
}
