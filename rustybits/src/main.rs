// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::rt::System;
use actix_web::{App, HttpServer, middleware::Logger, web};
use log::info;
use std::io::Write;
use std::sync::Arc;

use rustybits::app_state::AppState;
use rustybits::bootstrap::{self, BootstrapResult};
use rustybits::config::ValidatedConfig;
use rustybits::headers::Headers;
use rustybits::iam::{SessionMiddlewareFactory, UserServices};
use rustybits::runtime_paths::RuntimePaths;
use rustybits::store::BlogStore;

const HELP_TEXT: &str = "\
Usage: rustybits [-C <root>]

Options:
  -C <root>   Runtime directory holding config.yaml and blog.db (default: .)
  -h, --help  Show this help
";

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

fn run() -> i32 {
    let parsed_args = match parse_args() {
        Ok(args) => args,
        Err(error) => {
            eprintln!("❌ Invalid command line arguments: {}", error);
            eprintln!("❌ Use -C <root> to set the runtime directory.");
            return 1;
        }
    };

    if matches!(parsed_args.mode, RunMode::Help) {
        print!("{}", HELP_TEXT);
        return 0;
    }

    let bootstrap = match bootstrap::bootstrap_runtime(&parsed_args.runtime_root) {
        Ok(result) => result,
        Err(error) => {
            eprintln!("❌ Bootstrap error: {}", error);
            eprintln!("❌ Application cannot start with invalid configuration.");
            return 1;
        }
    };

    match System::new().block_on(run_server(bootstrap)) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("❌ Server failed to start: {}", error);
            1
        }
    }
}

async fn run_server(bootstrap: BootstrapResult) -> std::io::Result<()> {
    let validated_config = Arc::new(bootstrap.validated_config);
    let runtime_paths = bootstrap.runtime_paths;

    env_logger::Builder::from_default_env()
        .filter_level(validated_config.log_level())
        .target(env_logger::Target::Stdout)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .map_err(|error| {
            eprintln!("❌ Failed to initialize logger: {}", error);
            std::io::Error::other(error.to_string())
        })?;

    log_startup_info(&validated_config, &runtime_paths);

    let store = match BlogStore::connect(&validated_config.database_url).await {
        Ok(store) => store,
        Err(error) => {
            eprintln!("❌ Failed to open database: {}", error);
            eprintln!("❌ Application cannot start without its database.");
            return Err(std::io::Error::other(error.to_string()));
        }
    };

    info!("✅ Database ready at {}", validated_config.database_url);

    let user_services = match UserServices::new(&validated_config, store.clone()) {
        Ok(services) => Arc::new(services),
        Err(error) => {
            eprintln!("❌ Failed to initialize user services: {}", error);
            eprintln!("❌ Application cannot start without user services.");
            return Err(std::io::Error::other(error.to_string()));
        }
    };

    info!("✅ User services initialized successfully");

    if let Err(error) = bootstrap::ensure_admin_user(&user_services).await {
        eprintln!("❌ Failed to create the default account: {}", error);
        return Err(std::io::Error::other(error.to_string()));
    }

    let app_state = Arc::new(AppState::new(&validated_config, store));
    info!(
        "✅ App state initialized with app name: {}",
        validated_config.app.name
    );

    let workers = validated_config.server.workers;
    let address = (validated_config.server.host.clone(), validated_config.server.port);

    let factory = {
        let config_for_app = validated_config.clone();
        let app_state = app_state.clone();
        let user_services = user_services.clone();
        move || {
            App::new()
                .app_data(web::Data::from(config_for_app.clone()))
                .app_data(web::Data::from(app_state.clone()))
                .app_data(web::Data::from(user_services.clone()))
                .wrap(Logger::new(
                    r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %T"#,
                ))
                .wrap(Headers::new())
                .wrap(SessionMiddlewareFactory)
                .configure(rustybits::configure_routes)
        }
    };

    HttpServer::new(factory)
        .workers(workers)
        .bind(address)?
        .run()
        .await
}

fn log_startup_info(config: &ValidatedConfig, runtime_paths: &RuntimePaths) {
    info!("Starting {} - {}", config.app.name, config.app.description);
    info!("Workers: {}", config.server.workers);
    info!(
        "Listening on {}:{}",
        config.server.host, config.server.port
    );
    info!("Admin panel available at: {}/admin", config.base_url());
    info!("Config file: {}", runtime_paths.config_file.display());
    info!("Database file: {}", runtime_paths.database_file.display());
    info!("Runtime root: {}", runtime_paths.root.display());

    if let Ok(current_dir) = std::env::current_dir() {
        info!("Working directory: {}", current_dir.display());
    }
}

#[derive(Debug)]
enum RunMode {
    Serve,
    Help,
}

#[derive(Debug)]
struct ParsedArgs {
    runtime_root: std::path::PathBuf,
    mode: RunMode,
}

fn parse_args() -> Result<ParsedArgs, String> {
    parse_args_from(std::env::args().skip(1))
}

fn parse_args_from<I>(args: I) -> Result<ParsedArgs, String>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    if args.iter().any(|arg| is_help_flag(arg)) {
        return Ok(ParsedArgs {
            runtime_root: std::path::PathBuf::from("."),
            mode: RunMode::Help,
        });
    }

    let mut args = args.into_iter();
    let mut runtime_root = std::path::PathBuf::from(".");

    while let Some(arg) = args.next() {
        if arg == "--" {
            continue;
        } else if arg == "-C" {
            let value = args
                .next()
                .ok_or_else(|| "Missing value for -C".to_string())?;
            runtime_root = std::path::PathBuf::from(value);
        } else {
            return Err(format!("Unexpected argument '{}'", arg));
        }
    }

    let runtime_root = make_runtime_root_absolute(runtime_root)?;
    Ok(ParsedArgs {
        runtime_root,
        mode: RunMode::Serve,
    })
}

fn is_help_flag(arg: &str) -> bool {
    arg == "-h" || arg == "--help"
}

fn make_runtime_root_absolute(
    runtime_root: std::path::PathBuf,
) -> Result<std::path::PathBuf, String> {
    if runtime_root.is_absolute() {
        return Ok(runtime_root);
    }

    let current_dir = std::env::current_dir()
        .map_err(|error| format!("Failed to resolve current directory: {}", error))?;
    Ok(current_dir.join(runtime_root))
}

#[cfg(test)]
mod tests {
    use super::{RunMode, parse_args_from};

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn parse_args_defaults_to_serving_from_current_dir() {
        let parsed = parse_args_from(Vec::new()).expect("parse args");
        assert!(matches!(parsed.mode, RunMode::Serve));
        assert!(parsed.runtime_root.is_absolute());
    }

    #[test]
    fn parse_args_accepts_runtime_root() {
        let parsed = parse_args_from(args(&["-C", "runtime"])).expect("parse args");
        assert!(matches!(parsed.mode, RunMode::Serve));
        assert!(parsed.runtime_root.ends_with("runtime"));
    }

    #[test]
    fn parse_args_ignores_double_dash() {
        let parsed = parse_args_from(args(&["--", "-C", "runtime"])).expect("parse args");
        assert!(parsed.runtime_root.ends_with("runtime"));
    }

    #[test]
    fn parse_args_requires_value_for_runtime_root() {
        let error = parse_args_from(args(&["-C"])).expect_err("missing value");
        assert!(error.contains("-C"));
    }

    #[test]
    fn parse_args_rejects_unknown_arguments() {
        let error = parse_args_from(args(&["serve"])).expect_err("unknown argument");
        assert!(error.contains("serve"));
    }

    #[test]
    fn parse_args_accepts_help_flag() {
        let parsed = parse_args_from(args(&["-C", "runtime", "--help"])).expect("parse args");
        assert!(matches!(parsed.mode, RunMode::Help));

        let parsed = parse_args_from(args(&["-h"])).expect("parse args");
        assert!(matches!(parsed.mode, RunMode::Help));
    }
}
