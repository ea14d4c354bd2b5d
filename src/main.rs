mod api;
mod app;
mod async_ops_state;
mod cli;
mod config;
mod controller;
mod error;
mod event;
mod logging;
mod model;
mod server;
mod theme;
mod ui;

use std::io;
use std::panic;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use ratatui::DefaultTerminal;
use tracing::level_filters::LevelFilter;

use api::HttpTaskApi;
use app::App;
use cli::oneshot::{self, OneShot};
use cli::{Cli, Commands};
use config::{ApiConfig, API_URL_ENV};
use controller::TaskListController;
use error::Result;
use logging::LogTarget;
use model::TaskId;
use theme::Theme;

/// 启动 TUI 界面
fn run_tui(api_config: &ApiConfig, theme: Theme) -> Result<()> {
    let api = HttpTaskApi::new(api_config)?;
    let api_url = api.collection_url().to_string();
    tracing::info!(%api_url, "starting tui");

    let controller = TaskListController::new(Arc::new(api));
    let mut app = App::new(controller, theme, api_url);

    // 初始化终端
    let mut terminal = ratatui::init();

    // 首次拉取
    app.start();

    // 运行主循环
    let result = run(&mut terminal, &mut app);

    // 恢复终端
    ratatui::restore();

    Ok(result?)
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        // 检查后台操作结果
        app.poll_bg_result();

        // 渲染界面
        terminal.draw(|frame| ui::render(frame, app))?;

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}

/// 执行一次性子命令
fn run_oneshot(api_config: &ApiConfig, op: OneShot) -> Result<ExitCode> {
    let api = HttpTaskApi::new(api_config)?;
    let mut controller = TaskListController::new(Arc::new(api));

    let outcome = oneshot::execute(&mut controller, op, api_config.timeout());
    print!("{}", outcome.listing);
    if let Some(ref error) = outcome.error {
        eprintln!("Error: {}", error);
    }

    Ok(ExitCode::from(outcome.exit_code() as u8))
}

/// 启动开发后端
fn run_server(host: &str, port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::start_server(host, port))?;
    Ok(())
}

fn dispatch(cli: Cli) -> Result<ExitCode> {
    let command = cli.command.unwrap_or(Commands::Tui);

    // TUI 占用终端，日志写文件；其他命令写 stderr
    let target = match command {
        Commands::Tui => LogTarget::File(logging::log_dir()),
        _ => LogTarget::Stderr,
    };
    let _log_guard = logging::init(target, LevelFilter::INFO);

    // None 表示进入 TUI
    let op = match command {
        Commands::Serve { host, port } => {
            run_server(&host, port)?;
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Tui => None,
        Commands::List => Some(OneShot::List),
        Commands::Add { title } => Some(OneShot::Add(title)),
        Commands::Toggle { id } => Some(OneShot::Toggle(TaskId::new(id))),
        Commands::Delete { id } => Some(OneShot::Delete(TaskId::new(id))),
    };

    let config = config::load_config();
    let theme = Theme::from_name(&config.theme.name);
    let api_config = config::resolve_api(
        config.api,
        std::env::var(API_URL_ENV).ok(),
        cli.api_url,
    )?;

    match op {
        Some(op) => run_oneshot(&api_config, op),
        None => {
            run_tui(&api_config, theme)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    // 解析命令行参数
    let cli = Cli::parse();

    match dispatch(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "taskdeck failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
