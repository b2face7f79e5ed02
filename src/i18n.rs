// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库，文案位于 locales/*.yml
// 支持英文（默认，回退语言）和中文
// 占位符写法: %{name}
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 已打包的语言代码
pub fn available_locales() -> Vec<&'static str> {
    let mut locales = rust_i18n::available_locales!();
    locales.sort_unstable();
    locales
}

/// 将用户输入的语言代码匹配到已打包的语言
///
/// 忽略大小写，`_` 视同 `-`（"zh_cn" -> "zh-CN"）；未打包返回 None
pub fn resolve_locale(code: &str) -> Option<&'static str> {
    let wanted = code.trim().replace('_', "-");
    available_locales()
        .into_iter()
        .find(|l| l.eq_ignore_ascii_case(&wanted))
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"en" 或 "zh-CN"），调用方应先经 `resolve_locale` 校验
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use procurement_bundling::i18n::t;
/// let usage = t("cli.usage");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use procurement_bundling::i18n::t_with_args;
/// let msg = t_with_args("import.rejected_rows", &[("count", "3")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    fill_placeholders(&rust_i18n::t!(key), args)
}

/// 单次扫描替换 `%{name}`
///
/// 参数值原样输出，其中的 `%{..}` 不会被再次替换；未提供的占位符保留原文
fn fill_placeholders(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("%{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };

        let name = &after[..end];
        match args.iter().find(|(k, _)| *k == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 1]),
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // rust-i18n 的 locale 为全局状态，测试默认并行，需串行化
    static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_set_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("zh-CN");
        assert_eq!(current_locale(), "zh-CN");

        set_locale("en");
        assert_eq!(current_locale(), "en");
    }

    #[test]
    fn test_resolve_locale() {
        assert_eq!(resolve_locale("en"), Some("en"));
        assert_eq!(resolve_locale("zh_cn"), Some("zh-CN"));
        assert_eq!(resolve_locale(" ZH-CN "), Some("zh-CN"));
        assert_eq!(resolve_locale("fr"), None);
        assert!(available_locales().contains(&"en"));
    }

    #[test]
    fn test_translate_simple() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("zh-CN");
        assert!(t("cli.usage").starts_with("用法"));

        set_locale("en");
        assert!(t("cli.usage").starts_with("Usage"));
    }

    #[test]
    fn test_fill_placeholders_single_pass() {
        let filled = fill_placeholders(
            "%{vendor} total %{total}",
            &[("vendor", "ACME %{total}"), ("total", "38.00")],
        );
        assert_eq!(filled, "ACME %{total} total 38.00");
    }

    #[test]
    fn test_fill_placeholders_unknown_and_unclosed() {
        assert_eq!(fill_placeholders("a %{x} b", &[]), "a %{x} b");
        assert_eq!(fill_placeholders("a %{x", &[("x", "1")]), "a %{x");
        assert_eq!(fill_placeholders("no args", &[("x", "1")]), "no args");
    }

    #[test]
    fn test_insight_template_with_args() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        let args = [
            ("count", "3"),
            ("vendor", "Siemens Energy"),
            ("total", "38.00"),
            ("span", "30"),
            ("categories", "2"),
            ("efficiency", "13"),
        ];

        set_locale("zh-CN");
        let msg = t_with_args("insight.same_vendor", &args);
        assert!(msg.contains("Siemens Energy"));
        assert!(msg.contains("38.00"));
        assert!(!msg.contains("%{"));

        set_locale("en");
        let msg = t_with_args("insight.same_vendor", &args);
        assert!(msg.contains("Siemens Energy"));
        assert!(msg.contains("volume"));
        assert!(!msg.contains("%{"));
    }
}
