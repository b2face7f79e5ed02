// ==========================================
// 采购需求合并建议器 - 文件解析器实现
// ==========================================
// 阶段 0: 文件读取与解析为「表头 -> 文本值」行
// 支持: CSV (.csv) / JSON 数组 (.json)
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use csv::ReaderBuilder;
use serde_json::Value;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// 原始行：表头（去空白） -> 单元格文本（去空白）
pub type RawRow = HashMap<String, String>;

// ==========================================
// FileParser Trait
// ==========================================
pub trait FileParser: Send + Sync {
    /// 解析文件为原始行（跳过完全空白的行）
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<RawRow>>;
}

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row_map = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }

            // 跳过完全空白的行
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            records.push(row_map);
        }

        Ok(records)
    }
}

// ==========================================
// JSON Parser 实现
// ==========================================
// 顶层必须为对象数组；数字/布尔转文本，null 视为空
pub struct JsonParser;

impl JsonParser {
    fn value_to_text(value: &Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::String(s) => s.trim().to_string(),
            other => other.to_string(),
        }
    }
}

impl FileParser for JsonParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "json" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let raw = std::fs::read_to_string(file_path)?;
        let value: Value = serde_json::from_str(&raw)?;

        let items = value.as_array().ok_or_else(|| {
            ImportError::JsonParseError("顶层必须为数组".to_string())
        })?;

        let mut records = Vec::new();
        for (idx, item) in items.iter().enumerate() {
            let obj = item.as_object().ok_or_else(|| {
                ImportError::JsonParseError(format!("第 {} 个元素不是对象", idx + 1))
            })?;

            let row_map: RawRow = obj
                .iter()
                .map(|(k, v)| (k.trim().to_string(), Self::value_to_text(v)))
                .collect();

            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            records.push(row_map);
        }

        Ok(records)
    }
}

// ==========================================
// 通用解析器（按扩展名分派）
// ==========================================
pub struct UniversalFileParser;

impl FileParser for UniversalFileParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        match extension_of(file_path).as_str() {
            "csv" => CsvParser.parse_to_raw_records(file_path),
            "json" => JsonParser.parse_to_raw_records(file_path),
            other => {
                ensure_exists(file_path)?;
                Err(ImportError::UnsupportedFormat(other.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_csv_skips_blank_rows() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "id, vendor ,value").unwrap();
        writeln!(file, "PR-1, ABB ,1.5").unwrap();
        writeln!(file, ",,").unwrap();
        writeln!(file, "PR-2,Siemens,2").unwrap();

        let rows = CsvParser.parse_to_raw_records(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("vendor").map(String::as_str), Some("ABB"));
    }

    #[test]
    fn test_json_numbers_become_text() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"[{{"id": "PR-1", "value": 12.5, "region": null}}]"#).unwrap();

        let rows = JsonParser.parse_to_raw_records(file.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["value"], "12.5");
        assert_eq!(rows[0]["region"], "");
    }

    #[test]
    fn test_json_top_level_must_be_array() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"id": "PR-1"}}"#).unwrap();
        assert!(matches!(
            JsonParser.parse_to_raw_records(file.path()),
            Err(ImportError::JsonParseError(_))
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        let file = Builder::new().suffix(".xlsx").tempfile().unwrap();
        assert!(matches!(
            UniversalFileParser.parse_to_raw_records(file.path()),
            Err(ImportError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            UniversalFileParser.parse_to_raw_records(Path::new("/nonexistent/requests.csv")),
            Err(ImportError::FileNotFound(_))
        ));
    }
}
