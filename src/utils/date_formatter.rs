use chrono::{Duration, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotLabelFormat {
    /// Mon, Tue (week-scale charts)
    Weekday,
    /// 12 Jan (month-scale charts)
    DayMonth,
}

/// Determines the best label format based on how many slots the chart shows.
pub fn determine_slot_format(slot_count: usize) -> SlotLabelFormat {
    if slot_count <= 7 {
        SlotLabelFormat::Weekday
    } else {
        SlotLabelFormat::DayMonth
    }
}

/// Calendar date of a slot, for consecutive daily slots ending at `end_date`
/// (the last slot is "today").
pub fn slot_date(end_date: NaiveDate, slot_count: usize, index: usize) -> NaiveDate {
    if slot_count == 0 {
        return end_date;
    }
    let back = (slot_count - 1).saturating_sub(index.min(slot_count - 1)) as i64;
    end_date - Duration::days(back)
}

/// Formats a slot date according to the specified format.
pub fn format_slot_label(date: NaiveDate, format: SlotLabelFormat) -> String {
    match format {
        SlotLabelFormat::Weekday => date.format("%a").to_string(),
        SlotLabelFormat::DayMonth => date.format("%d %b").to_string(),
    }
}
