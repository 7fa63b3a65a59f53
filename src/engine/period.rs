use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateOrText {
    Date(NaiveDate),
    Text(String),
}

impl DateOrText {
    fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }

        Some(match NaiveDate::parse_from_str(token, "%d.%m.%Y") {
            Ok(date) => Self::Date(date),
            Err(_) => Self::Text(token.to_string()),
        })
    }

    pub fn render(&self) -> String {
        match self {
            Self::Date(date) => date.format("%Y-%m-%d").to_string(),
            Self::Text(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Period {
    pub start: Option<DateOrText>,
    pub end: Option<DateOrText>,
}

pub fn parse_period(text: &str) -> Period {
    let text = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Period {
            start: Some(DateOrText::Date(date)),
            end: None,
        };
    }

    let mut tokens = text.splitn(2, '-');
    let start = tokens.next().and_then(DateOrText::parse);
    let end = tokens.next().and_then(DateOrText::parse);

    Period { start, end }
}
