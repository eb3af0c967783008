const HUNDRED_MILLION: i64 = 1_0000_0000;
const TEN_THOUSAND: i64 = 1_0000;

// Formats each x1000 step
pub fn format_number(number: i64) -> String {
    let num_str = number.unsigned_abs().to_string();
    let mut result = String::new();
    if number < 0 {
        result.push('-');
    }
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Korean-style abbreviation of a count: 억 (10^8) and 만 (10^4) with one
/// decimal, grouped digits below that. Input that is not an integer is
/// returned as-is. No unit suffix is appended.
pub fn humanize_count(count: &str) -> String {
    let Ok(n) = count.trim().parse::<i64>() else {
        return count.to_string();
    };

    if n >= HUNDRED_MILLION {
        return format!("{:.1}억", n as f64 / HUNDRED_MILLION as f64);
    }
    if n >= TEN_THOUSAND {
        return format!("{:.1}만", n as f64 / TEN_THOUSAND as f64);
    }
    format_number(n)
}

pub fn watch_url(video_id: &str) -> String {
    if video_id.is_empty() {
        "#".to_string()
    } else {
        format!(
            "https://www.youtube.com/watch?v={}",
            urlencoding::encode(video_id)
        )
    }
}
