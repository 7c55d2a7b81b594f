//! Dates, times and zones as used by APPEND and the SEARCH date keys.

use chrono::{DateTime, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::error::Result;
use crate::parser::Parser;
use crate::transport::Transport;

const MONTHS: [&[u8]; 12] = [
    b"jan", b"feb", b"mar", b"apr", b"may", b"jun", b"jul", b"aug", b"sep", b"oct", b"nov", b"dec",
];

impl<T: Transport> Parser<'_, T> {
    /// `date-day = 1*2DIGIT`
    pub(crate) fn xdate_day(&mut self) -> Result<u32> {
        let mut d = vec![self.xdigit()?];
        if let Some(b) = self.digit() {
            d.push(b);
        }
        self.xint(&d)
    }

    /// `date-day-fixed = (SP DIGIT) / 2DIGIT`
    pub(crate) fn xdate_day_fixed(&mut self) -> Result<u32> {
        if self.take(" ") {
            let b = self.xdigit()?;
            return self.xint(&[b]);
        }
        let d = [self.xdigit()?, self.xdigit()?];
        self.xint(&d)
    }

    /// `date-month = "Jan" / "Feb" / ... / "Dec"`, case-insensitive.
    pub(crate) fn xdate_month(&mut self) -> Result<u32> {
        let s = self.xtaken(3)?.to_ascii_lowercase();
        for (i, m) in MONTHS.iter().enumerate() {
            if s == *m {
                return Ok(i as u32 + 1);
            }
        }
        self.fail(format!("unknown month {:?}", String::from_utf8_lossy(&s)))
    }

    /// `time = 2DIGIT ":" 2DIGIT ":" 2DIGIT`
    ///
    /// Digits only; values are not range-checked here.
    pub(crate) fn xtime(&mut self) -> Result<(u32, u32, u32)> {
        let h = self.xtaken(2)?;
        let h = self.xint(&h)?;
        self.xtake(":")?;
        let m = self.xtaken(2)?;
        let m = self.xint(&m)?;
        self.xtake(":")?;
        let s = self.xtaken(2)?;
        let s = self.xint(&s)?;
        Ok((h, m, s))
    }

    /// `zone = ("+" / "-") 4DIGIT`, returned as seconds east of UTC.
    pub(crate) fn xzone(&mut self) -> Result<i32> {
        let sign = self.xtakelist(&["+", "-"])?;
        let s = self.xtaken(4)?;
        let v = self.xint(&s)? as i32;
        let mut seconds = (v / 100) * 3600 + (v % 100) * 60;
        if sign == "-" {
            seconds = -seconds;
        }
        Ok(seconds)
    }

    /// `date = date-text / DQUOTE date-text DQUOTE`
    ///
    /// When the date opened with a quote, a closing quote is consumed if
    /// present but not required. The value stands for midnight UTC of that
    /// day.
    pub fn xdate(&mut self) -> Result<NaiveDate> {
        let dquote = self.take("\"");
        let day = self.xdate_day()?;
        self.xtake("-")?;
        let month = self.xdate_month()?;
        self.xtake("-")?;
        let year = self.xtaken(4)?;
        let year = self.xint(&year)?;
        if dquote {
            self.take("\"");
        }
        match NaiveDate::from_ymd_opt(year as i32, month, day) {
            Some(date) => Ok(date),
            None => self.fail("invalid date"),
        }
    }

    /// `date-time = DQUOTE date-day-fixed "-" date-month "-" date-year SP
    /// time SP zone DQUOTE`
    pub fn xdate_time(&mut self) -> Result<DateTime<FixedOffset>> {
        self.xtake("\"")?;
        let day = self.xdate_day_fixed()?;
        self.xtake("-")?;
        let month = self.xdate_month()?;
        self.xtake("-")?;
        let year = self.xtaken(4)?;
        let year = self.xint(&year)?;
        self.xspace()?;
        let (hours, minutes, seconds) = self.xtime()?;
        self.xspace()?;
        let zone_seconds = self.xzone()?;
        self.xtake("\"")?;

        let date = NaiveDate::from_ymd_opt(year as i32, month, day);
        let time = NaiveTime::from_hms_opt(hours, minutes, seconds);
        let zone = FixedOffset::east_opt(zone_seconds);
        if let (Some(date), Some(time), Some(zone)) = (date, time, zone) {
            if let LocalResult::Single(datetime) =
                zone.from_local_datetime(&NaiveDateTime::new(date, time))
            {
                return Ok(datetime);
            }
        }
        self.fail("invalid date-time")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeConn;

    #[test]
    fn test_date_day() {
        let mut conn = FakeConn::default();
        let mut p = Parser::new("1-", &mut conn);
        assert_eq!(p.xdate_day().unwrap(), 1);

        let mut p = Parser::new("28-", &mut conn);
        assert_eq!(p.xdate_day().unwrap(), 28);
    }

    #[test]
    fn test_date_day_fixed() {
        let mut conn = FakeConn::default();
        let mut p = Parser::new(" 7-", &mut conn);
        assert_eq!(p.xdate_day_fixed().unwrap(), 7);

        let mut p = Parser::new("07-", &mut conn);
        assert_eq!(p.xdate_day_fixed().unwrap(), 7);

        let mut p = Parser::new("7-", &mut conn);
        assert!(p.xdate_day_fixed().is_err());
    }

    #[test]
    fn test_date_month() {
        let mut conn = FakeConn::default();
        for (s, m) in [("jan", 1), ("Feb", 2), ("DEC", 12)] {
            let mut p = Parser::new(s, &mut conn);
            assert_eq!(p.xdate_month().unwrap(), m);
        }

        let mut p = Parser::new("foo", &mut conn);
        assert!(p.xdate_month().is_err());
    }

    #[test]
    fn test_zone() {
        let mut conn = FakeConn::default();
        let mut p = Parser::new("+0000", &mut conn);
        assert_eq!(p.xzone().unwrap(), 0);

        let mut p = Parser::new("+0130", &mut conn);
        assert_eq!(p.xzone().unwrap(), 3600 + 30 * 60);

        let mut p = Parser::new("-0205", &mut conn);
        assert_eq!(p.xzone().unwrap(), -(2 * 3600 + 5 * 60));

        let mut p = Parser::new("0000", &mut conn);
        assert!(p.xzone().is_err());
    }

    #[test]
    fn test_date() {
        let mut conn = FakeConn::default();
        let expected = NaiveDate::from_ymd_opt(2020, 2, 1).unwrap();

        let mut p = Parser::new("1-Feb-2020 rest", &mut conn);
        assert_eq!(p.xdate().unwrap(), expected);
        assert!(p.space());

        let mut p = Parser::new("\"01-feb-2020\"", &mut conn);
        assert_eq!(p.xdate().unwrap(), expected);

        // The closing quote is not required once opened.
        let mut p = Parser::new("\"1-Feb-2020", &mut conn);
        assert_eq!(p.xdate().unwrap(), expected);

        let mut p = Parser::new("31-Feb-2020", &mut conn);
        assert!(p.xdate().is_err());
    }

    #[test]
    fn test_date_time() {
        let mut conn = FakeConn::default();

        let mut p = Parser::new("\" 7-Feb-1994 21:52:25 -0800\"", &mut conn);
        let got = p.xdate_time().unwrap();
        let expected = FixedOffset::west_opt(8 * 3600)
            .unwrap()
            .with_ymd_and_hms(1994, 2, 7, 21, 52, 25)
            .unwrap();
        assert_eq!(got, expected);

        // Out-of-range time values fail when the value is assembled.
        let mut p = Parser::new("\"07-Feb-1994 99:99:99 +0000\"", &mut conn);
        assert!(p.xdate_time().is_err());

        let mut p = Parser::new("\"07-Feb-1994 21:52:25 +0000", &mut conn);
        assert!(p.xdate_time().is_err());
    }
}
