//! Achievement activity calendar for the unlock heat-map

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::ACTIVITY_WINDOW_DAYS;
use crate::AchievementUnlock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDay {
    pub date: NaiveDate,
    pub count: u32,
}

impl ActivityDay {
    /// Heat-map shade: 0 = none, 1 = 1-2 unlocks, 2 = 3-5, 3 = 6+
    pub fn intensity(&self) -> u8 {
        match self.count {
            0 => 0,
            1..=2 => 1,
            3..=5 => 2,
            _ => 3,
        }
    }
}

/// Count unlocks per UTC calendar day over the year ending at `today`.
///
/// Always returns `ACTIVITY_WINDOW_DAYS` entries, oldest first. Unlocks with
/// no timestamp or outside the window are ignored.
pub fn build_activity_calendar(unlocks: &[AchievementUnlock], today: NaiveDate) -> Vec<ActivityDay> {
    let start = today
        .checked_sub_days(Days::new(ACTIVITY_WINDOW_DAYS as u64 - 1))
        .unwrap_or(NaiveDate::MIN);

    let mut counts = vec![0u32; ACTIVITY_WINDOW_DAYS];
    for unlock in unlocks {
        let Some(unlocked_at) = unlock.unlocked_at() else {
            continue;
        };
        let date = unlocked_at.date_naive();
        if date < start || date > today {
            continue;
        }
        let offset = (date - start).num_days() as usize;
        if let Some(count) = counts.get_mut(offset) {
            *count += 1;
        }
    }

    start
        .iter_days()
        .zip(counts)
        .map(|(date, count)| ActivityDay { date, count })
        .collect()
}

pub fn total_unlocks(calendar: &[ActivityDay]) -> u32 {
    calendar.iter().map(|d| d.count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, TimeZone, Utc};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn unlock_on(date: NaiveDate, hour: u32) -> AchievementUnlock {
        let at = Utc.from_utc_datetime(&date.and_time(NaiveTime::from_hms_opt(hour, 15, 0).unwrap()));
        AchievementUnlock {
            apiname: format!("ACH_{}_{}", date, hour),
            name: None,
            description: None,
            achieved: 1,
            unlocktime: at.timestamp() as u64,
        }
    }

    #[test]
    fn test_always_365_days() {
        let calendar = build_activity_calendar(&[], today());
        assert_eq!(calendar.len(), 365);
        assert_eq!(calendar.last().map(|d| d.date), Some(today()));
        assert_eq!(calendar[0].date, today() - Days::new(364));
        assert_eq!(total_unlocks(&calendar), 0);
    }

    #[test]
    fn test_today_and_same_day_sum() {
        let unlocks = vec![unlock_on(today(), 1), unlock_on(today(), 23)];
        let calendar = build_activity_calendar(&unlocks, today());
        assert_eq!(calendar[364].count, 2);
        assert_eq!(total_unlocks(&calendar), 2);
    }

    #[test]
    fn test_out_of_window_dropped() {
        let unlocks = vec![
            unlock_on(today() - Days::new(400), 12),
            unlock_on(today() - Days::new(365), 12),
            unlock_on(today() + Days::new(1), 12),
            unlock_on(today() - Days::new(364), 12),
        ];
        let calendar = build_activity_calendar(&unlocks, today());
        assert_eq!(calendar.len(), 365);
        assert_eq!(total_unlocks(&calendar), 1);
        assert_eq!(calendar[0].count, 1);
    }

    #[test]
    fn test_missing_timestamp_excluded() {
        let mut unknown = unlock_on(today(), 12);
        unknown.unlocktime = 0;
        let calendar = build_activity_calendar(&[unknown], today());
        assert_eq!(total_unlocks(&calendar), 0);
    }

    #[test]
    fn test_order_independent() {
        let mut unlocks = vec![
            unlock_on(today() - Days::new(3), 8),
            unlock_on(today() - Days::new(10), 8),
            unlock_on(today() - Days::new(3), 20),
        ];
        let forward = build_activity_calendar(&unlocks, today());
        unlocks.reverse();
        let backward = build_activity_calendar(&unlocks, today());
        assert_eq!(forward, backward);
        assert_eq!(forward[361].count, 2);
        assert_eq!(forward[354].count, 1);
    }

    #[test]
    fn test_intensity_levels() {
        let day = |count| ActivityDay { date: today(), count };
        assert_eq!(day(0).intensity(), 0);
        assert_eq!(day(2).intensity(), 1);
        assert_eq!(day(3).intensity(), 2);
        assert_eq!(day(5).intensity(), 2);
        assert_eq!(day(6).intensity(), 3);
    }
}
