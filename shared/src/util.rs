//! Ids and timestamps for stored records

use rand::Rng;

/// Record ids count milliseconds from 2024-01-01 00:00:00 UTC
const ID_EPOCH_MS: i64 = 1_704_067_200_000;
const ID_TIME_BITS: u32 = 41;
const ID_SALT_BITS: u32 = 12;

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// New primary key for a user, member, job, work log or any other row.
///
/// 41 bits of time above 12 random bits, so ids stay below 2^53 and
/// can be passed to a browser as plain JSON numbers.
pub fn record_id() -> i64 {
    record_id_at(now_millis())
}

fn record_id_at(millis: i64) -> i64 {
    let elapsed = (millis - ID_EPOCH_MS) & ((1 << ID_TIME_BITS) - 1);
    let salt = rand::thread_rng().gen_range(0..1i64 << ID_SALT_BITS);
    (elapsed << ID_SALT_BITS) | salt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_ids_are_json_safe() {
        const MAX_SAFE: i64 = (1 << 53) - 1;
        for _ in 0..100 {
            let id = record_id();
            assert!(id > 0);
            assert!(id <= MAX_SAFE);
        }
    }

    #[test]
    fn later_milliseconds_give_larger_ids() {
        let t = ID_EPOCH_MS + 86_400_000;
        for _ in 0..50 {
            assert!(record_id_at(t + 1) > record_id_at(t));
        }
        assert_eq!(record_id_at(t) >> ID_SALT_BITS, 86_400_000);
    }
}
