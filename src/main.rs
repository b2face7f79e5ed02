// ==========================================
// 采购需求合并建议器 - 命令行入口
// ==========================================
// 用法:
//   procurement-bundling <requests.csv|requests.json> [--config <file>] [--locale <code>]
// 输出: stdout 为 JSON 报告；日志写 stderr
// ==========================================

use anyhow::{bail, Context, Result};
use procurement_bundling::i18n::{available_locales, resolve_locale, set_locale, t, t_with_args};
use procurement_bundling::{load_config, logging, BundlingApi};
use serde_json::json;
use std::path::PathBuf;

struct CliArgs {
    input: PathBuf,
    config: Option<PathBuf>,
    locale: Option<String>,
}

fn parse_args() -> Result<CliArgs> {
    let mut args = std::env::args().skip(1);
    let mut input = None;
    let mut config = None;
    let mut locale = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                config = Some(PathBuf::from(args.next().context("--config 缺少参数")?));
            }
            "--locale" => {
                locale = Some(args.next().context("--locale 缺少参数")?);
            }
            "-h" | "--help" => bail!(t("cli.usage")),
            other if other.starts_with("--") => bail!("未知参数: {}\n{}", other, t("cli.usage")),
            other => {
                if input.is_some() {
                    bail!("只能指定一个输入文件\n{}", t("cli.usage"));
                }
                input = Some(PathBuf::from(other));
            }
        }
    }

    let input = input.with_context(|| t("cli.usage"))?;
    Ok(CliArgs {
        input,
        config,
        locale,
    })
}

fn main() -> Result<()> {
    logging::init();

    let args = parse_args()?;
    if let Some(code) = args.locale.as_deref() {
        let Some(locale) = resolve_locale(code) else {
            bail!("不支持的语言: {}（可选: {}）", code, available_locales().join(", "));
        };
        set_locale(locale);
    }

    tracing::info!("==================================================");
    tracing::info!("{} v{}", procurement_bundling::APP_NAME, procurement_bundling::VERSION);
    tracing::info!("==================================================");

    let config = load_config(args.config.as_deref()).context("加载合并规则配置失败")?;
    let api = BundlingApi::new(config)?;

    let (import, report) = api
        .import_and_analyze(&args.input)
        .with_context(|| format!("处理需求文件失败: {}", args.input.display()))?;

    let rejected = import.rejected_rows();
    if rejected > 0 {
        let count = rejected.to_string();
        tracing::warn!("{}", t_with_args("import.rejected_rows", &[("count", count.as_str())]));
    }

    let s = &report.summary;
    tracing::info!(
        "{}",
        t_with_args(
            "cli.summary",
            &[
                ("bundles", s.bundle_count.to_string().as_str()),
                ("bundled", s.bundled_count.to_string().as_str()),
                ("total", s.request_count.to_string().as_str()),
                ("coverage", format!("{:.1}", s.value_coverage * 100.0).as_str()),
                ("unbundled", s.unbundled_count.to_string().as_str()),
            ],
        )
    );

    let output = json!({
        "import": {
            "batchId": import.batch_id,
            "fileName": import.file_name,
            "totalRows": import.total_rows,
            "rejectedRows": rejected,
            "violations": import.violations,
        },
        "sourcingEventId": api.generate_sourcing_event_id(),
        "report": report,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
