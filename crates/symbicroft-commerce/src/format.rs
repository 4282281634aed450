//! Display and validation helpers shared by storefront and admin screens.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

// Indian mobile numbers: ten digits, leading 6-9.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[6-9][0-9]{9}$").expect("valid phone regex"));

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

static FILENAME_INVALID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9.]").expect("valid filename regex"));

static DASH_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-+").expect("valid dash regex"));

/// Image MIME types accepted for product uploads.
pub const IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// Default upload size limit in megabytes.
pub const DEFAULT_MAX_UPLOAD_MB: f64 = 5.0;

/// Default excerpt length for article previews.
pub const DEFAULT_EXCERPT_LEN: usize = 150;

/// Stock level below which "Only N left" is shown.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Format a price in Indian Rupees, e.g. `₹500.00`.
pub fn format_price(price: f64) -> String {
    format!("\u{20b9}{price:.2}")
}

/// Group an integer the Indian way (lakhs, crores): `1234567` ⇒ `12,34,567`.
pub fn format_indian_number(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let sign = if n < 0 { "-" } else { "" };
    if digits.len() <= 3 {
        return format!("{sign}{digits}");
    }

    let (head, last3) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{sign}{},{last3}", groups.join(","))
}

/// Truncate to `max_len` characters, appending `...` when anything was cut.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}...", &text[..cut]),
    }
}

/// Strip HTML tags and truncate, for article previews.
pub fn generate_excerpt(html: &str, max_len: usize) -> String {
    let text = TAG_RE.replace_all(html, "");
    truncate_text(&text, max_len)
}

/// Loose email shape check: something, `@`, something, `.`, something.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Indian mobile number check.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Whether any units are available.
pub fn is_in_stock(stock_quantity: i64) -> bool {
    stock_quantity > 0
}

/// Customer-facing stock label. Zero or negative stock is out of stock.
pub fn stock_status(stock_quantity: i64) -> String {
    if stock_quantity <= 0 {
        "Out of Stock".to_string()
    } else if stock_quantity < LOW_STOCK_THRESHOLD {
        format!("Only {stock_quantity} left")
    } else {
        "In Stock".to_string()
    }
}

/// Fallback shown when a product or article has no uploaded image.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-image.jpg";

/// Full URL of an uploaded image, or [`PLACEHOLDER_IMAGE`] when there is none.
pub fn image_url(uploads_url: &str, image_path: Option<&str>) -> String {
    match image_path.map(str::trim) {
        Some(path) if !path.is_empty() => {
            format!("{}/{}", uploads_url.trim_end_matches('/'), path.trim_start_matches('/'))
        }
        _ => PLACEHOLDER_IMAGE.to_string(),
    }
}

/// Anything priced per line: a unit price times a quantity.
pub trait LineAmount {
    /// Price of the whole line.
    fn amount(&self) -> f64;
}

impl LineAmount for (f64, i64) {
    fn amount(&self) -> f64 {
        self.0 * self.1 as f64
    }
}

/// Sum of line amounts. Zero for no lines.
pub fn calculate_total<'a, T>(lines: impl IntoIterator<Item = &'a T>) -> f64
where
    T: LineAmount + 'a,
{
    lines.into_iter().map(LineAmount::amount).sum()
}

/// Lowercase a filename and replace anything outside `[a-z0-9.]` with single dashes.
pub fn sanitize_filename(filename: &str) -> String {
    let lower = filename.to_lowercase();
    let replaced = FILENAME_INVALID_RE.replace_all(&lower, "-");
    let collapsed = DASH_RUN_RE.replace_all(&replaced, "-");
    collapsed.trim_matches('-').to_string()
}

/// Human-readable size, e.g. `1.5 KB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exp = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exp = exp.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exp as i32);
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded} {}", UNITS[exp])
}

/// Whether an upload of `size_bytes` fits within `max_mb` megabytes.
pub fn is_valid_file_size(size_bytes: u64, max_mb: f64) -> bool {
    size_bytes as f64 <= max_mb * 1024.0 * 1024.0
}

/// Whether a MIME type is an accepted product image type.
pub fn is_valid_image_type(mime: &str) -> bool {
    IMAGE_TYPES.contains(&mime)
}

/// Long Indian-style date, e.g. `19 October 2026`.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Relative time label ("Just now", "5 minutes ago", ...), falling back to
/// [`format_date`] after a week.
pub fn relative_time(then: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let mins = (*now - *then).num_minutes();
    let hours = mins / 60;
    let days = hours / 24;

    fn plural(n: i64, unit: &str) -> String {
        format!("{n} {unit}{} ago", if n > 1 { "s" } else { "" })
    }

    if mins < 1 {
        "Just now".to_string()
    } else if mins < 60 {
        plural(mins, "minute")
    } else if hours < 24 {
        plural(hours, "hour")
    } else if days < 7 {
        plural(days, "day")
    } else {
        format_date(then)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(500.0), "\u{20b9}500.00");
        assert_eq!(format_price(99.5), "\u{20b9}99.50");
    }

    #[test]
    fn test_format_indian_number() {
        assert_eq!(format_indian_number(999), "999");
        assert_eq!(format_indian_number(1000), "1,000");
        assert_eq!(format_indian_number(100000), "1,00,000");
        assert_eq!(format_indian_number(1234567), "12,34,567");
        assert_eq!(format_indian_number(-12345678), "-1,23,45,678");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_text("hello world", 5), "hello...");
        assert_eq!(truncate_text("₹₹₹₹", 2), "₹₹...");
    }

    #[test]
    fn test_generate_excerpt_strips_tags() {
        let html = "<p>Fresh <b>masala</b> blend</p>";
        assert_eq!(generate_excerpt(html, DEFAULT_EXCERPT_LEN), "Fresh masala blend");
        assert_eq!(generate_excerpt(html, 5), "Fresh...");
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("a@b.in"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.in"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_phone_validation() {
        assert!(is_valid_phone("9876543210"));
        assert!(!is_valid_phone("5876543210"));
        assert!(!is_valid_phone("987654321"));
        assert!(!is_valid_phone("98765432101"));
    }

    #[test]
    fn test_stock_status() {
        assert!(!is_in_stock(0));
        assert!(is_in_stock(1));
        assert_eq!(stock_status(0), "Out of Stock");
        assert_eq!(stock_status(3), "Only 3 left");
        assert_eq!(stock_status(10), "In Stock");
    }

    #[test]
    fn test_negative_stock_reads_out_of_stock() {
        // Oversold products report "Out of Stock", never "Only -2 left".
        assert_eq!(stock_status(-2), "Out of Stock");
        assert!(!is_in_stock(-2));
    }

    #[test]
    fn test_image_url() {
        assert_eq!(
            image_url("https://cdn.symbicroft.in/uploads/", Some("products/masala.png")),
            "https://cdn.symbicroft.in/uploads/products/masala.png"
        );
        assert_eq!(image_url("/uploads", Some("/a.png")), "/uploads/a.png");
        assert_eq!(image_url("/uploads", Some("")), PLACEHOLDER_IMAGE);
        assert_eq!(image_url("/uploads", None), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_calculate_total() {
        let lines: [(f64, i64); 3] = [(100.0, 2), (45.5, 1), (10.0, 0)];
        assert_eq!(calculate_total(&lines), 245.5);
        let none: [(f64, i64); 0] = [];
        assert_eq!(calculate_total(&none), 0.0);
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("My Photo (1).JPG"), "my-photo-1-.jpg");
        assert_eq!(sanitize_filename("--Garam  Masala--.png"), "garam-masala-.png");
        assert_eq!(sanitize_filename("_x_"), "x");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
    }

    #[test]
    fn test_upload_checks() {
        assert!(is_valid_file_size(5 * 1024 * 1024, DEFAULT_MAX_UPLOAD_MB));
        assert!(!is_valid_file_size(5 * 1024 * 1024 + 1, DEFAULT_MAX_UPLOAD_MB));
        assert!(is_valid_image_type("image/webp"));
        assert!(!is_valid_image_type("image/gif"));
    }

    #[test]
    fn test_relative_time() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        assert_eq!(relative_time(&now, &now), "Just now");
        assert_eq!(relative_time(&(now - Duration::minutes(1)), &now), "1 minute ago");
        assert_eq!(relative_time(&(now - Duration::hours(5)), &now), "5 hours ago");
        assert_eq!(relative_time(&(now - Duration::days(2)), &now), "2 days ago");
        assert_eq!(relative_time(&(now - Duration::days(30)), &now), "19 September 2026");
    }
}
