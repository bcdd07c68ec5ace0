/// Format a price in millions, e.g. `1.2M`
pub fn format_million(price: f64) -> String {
    format!("{:.1}M", price / 1e6)
}

/// Format a fractional rate as a percentage, e.g. `5.2%`
pub fn format_percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}
