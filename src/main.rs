use anyhow::Result;
use std::path::Path;
use study_tutor::app::App;
use study_tutor::utils::logging;
use study_tutor::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置：可选的 TOML 文件，环境变量优先
    let config = match std::env::var("STUDY_TUTOR_CONFIG") {
        Ok(path) => Config::from_toml_file(Path::new(&path))?.merge_env(),
        Err(_) => Config::from_env(),
    };

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    App::initialize(config).run().await?;

    Ok(())
}
