//! 価格テキストの解析と表示

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

/// 価格の解析モード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceParsing {
    /// 先頭の数値部分だけを読む。数値がなければNaN（失敗しない）
    #[default]
    Lenient,
    /// 全体が有限の数値でなければエラー
    Strict,
}

impl std::str::FromStr for PriceParsing {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lenient" | "loose" => Ok(PriceParsing::Lenient),
            "strict" => Ok(PriceParsing::Strict),
            _ => Err(format!("Unknown price parsing: {}. Use lenient or strict", s)),
        }
    }
}

impl std::fmt::Display for PriceParsing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceParsing::Lenient => write!(f, "lenient"),
            PriceParsing::Strict => write!(f, "strict"),
        }
    }
}

/// 空でない価格テキストを数値に変換
pub fn parse_price(text: &str, mode: PriceParsing) -> Result<f64> {
    match mode {
        PriceParsing::Lenient => Ok(parse_leading_float(text)),
        PriceParsing::Strict => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| ValidationError::InvalidPrice(text.to_string())),
    }
}

/// 先頭の空白を飛ばし、最長の数値プレフィックスを解析する
///
/// `"12.5abc"` → 12.5, `"-Infinity"` → -∞, `"abc"` → NaN
pub fn parse_leading_float(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    // 指数部は後ろに数字がある場合のみ採用
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// 小数点以下2桁で表示（JS の `toFixed(2)` と同じ丸め）
///
/// 正確な10進展開の3桁目が5以上なら切り上げる（ちょうど中間なら大きい方）。
/// 絶対値 1e21 以上は指数表記、NaN / Infinity はそのまま。
pub fn format_price(price: f64) -> String {
    if price.is_nan() {
        return "NaN".to_string();
    }
    if price.is_infinite() {
        return if price > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() };
    }

    // -0.0 は符号なし
    let sign = if price < 0.0 { "-" } else { "" };
    let magnitude = price.abs();
    if magnitude >= 1e21 {
        return format!("{sign}{}", format!("{:e}", magnitude).replacen('e', "e+", 1));
    }

    // f64 の小数部は最大1074桁なので、この精度なら展開は正確
    let exact = format!("{:.1074}", magnitude);
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(2))
        .collect();
    if frac_part.as_bytes().get(2).is_some_and(|d| *d >= b'5') {
        increment_decimal(&mut digits);
    }

    let (int_digits, frac_digits) = digits.split_at(digits.len() - 2);
    let int_text: String = int_digits.iter().map(|&d| d as char).collect();
    let frac_text: String = frac_digits.iter().map(|&d| d as char).collect();
    format!("{sign}{int_text}.{frac_text}")
}

/// ASCII 数字列に1を足す（繰り上がりで桁が増えることもある）
fn increment_decimal(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}
