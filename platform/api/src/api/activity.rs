//! Date bucketed posting statistics for a user's profile page.
//!
//! Every operation takes the governing calendar date as `today` instead of
//! reading a clock, the embedding layer resolves "today" in its time zone
//! once per request. Day windows are half open instant ranges
//! `[00:00, next day 00:00)` in UTC.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use common::database::Ulid;

use crate::api::error::Result;
use crate::global::GlobalState;

/// Count of book entries the user posted within the full day `date`.
pub async fn count_for_day(global: &GlobalState, user_id: Ulid, date: NaiveDate) -> Result<i64> {
    let (from, to) = day_window(date, date);

    count_between(global, user_id, from, to).await
}

pub async fn todays_count(global: &GlobalState, user_id: Ulid, today: NaiveDate) -> Result<i64> {
    count_for_day(global, user_id, today).await
}

pub async fn yesterdays_count(
    global: &GlobalState,
    user_id: Ulid,
    today: NaiveDate,
) -> Result<i64> {
    count_for_day(global, user_id, today - Duration::days(1)).await
}

/// Ratio of today's entry count to yesterday's, rounded to 2 decimals.
/// `None` when yesterday has no entries to compare against.
pub async fn day_over_day(
    global: &GlobalState,
    user_id: Ulid,
    today: NaiveDate,
) -> Result<Option<f64>> {
    let todays = todays_count(global, user_id, today).await?;
    let yesterdays = yesterdays_count(global, user_id, today).await?;

    Ok(ratio(todays, yesterdays))
}

/// Count of entries within the 7 calendar days ending with `today`.
pub async fn this_week_count(global: &GlobalState, user_id: Ulid, today: NaiveDate) -> Result<i64> {
    let (from, to) = day_window(today - Duration::days(6), today);

    count_between(global, user_id, from, to).await
}

/// Count of entries within the 7 calendar days right before this week's
/// window, `today - 13` through `today - 7`.
pub async fn last_week_count(global: &GlobalState, user_id: Ulid, today: NaiveDate) -> Result<i64> {
    let (from, to) = day_window(today - Duration::days(13), today - Duration::days(7));

    count_between(global, user_id, from, to).await
}

/// Ratio of this week's entry count to last week's, rounded to 2 decimals.
/// `None` when last week has no entries to compare against.
pub async fn week_over_week(
    global: &GlobalState,
    user_id: Ulid,
    today: NaiveDate,
) -> Result<Option<f64>> {
    let this_week = this_week_count(global, user_id, today).await?;
    let last_week = last_week_count(global, user_id, today).await?;

    Ok(ratio(this_week, last_week))
}

/// Per day entry counts for the last 7 days in chronological order:
/// index 0 is six days ago, index 6 is `today`.
pub async fn last_7_days(
    global: &GlobalState,
    user_id: Ulid,
    today: NaiveDate,
) -> Result<Vec<i64>> {
    let mut counts = Vec::with_capacity(7);

    for days_back in (0..7).rev() {
        counts.push(count_for_day(global, user_id, today - Duration::days(days_back)).await?);
    }

    Ok(counts)
}

async fn count_between(
    global: &GlobalState,
    user_id: Ulid,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Result<i64> {
    let (count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM books WHERE user_id = $1 AND created_at >= $2 AND created_at < $3",
    )
    .bind(user_id)
    .bind(from)
    .bind(to)
    .fetch_one(global.db.as_ref())
    .await?;

    Ok(count)
}

/// Half open instant range covering the full days `from` through `to`.
pub(crate) fn day_window(from: NaiveDate, to: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    (day_start(from), day_start(to + Duration::days(1)))
}

fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0)
        .expect("midnight is always a valid time")
        .and_utc()
}

/// 2 decimal ratio of two counts. `None` when the denominator is empty, the
/// comparison is unavailable rather than infinite.
pub(crate) fn ratio(numerator: i64, denominator: i64) -> Option<f64> {
    if denominator <= 0 {
        return None;
    }

    Some((numerator as f64 / denominator as f64 * 100.0).round() / 100.0)
}
