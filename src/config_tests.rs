use crate::config::AdvisoryPolicy;
use rust_decimal_macros::dec;
use std::env;
use std::sync::Mutex;
use std::sync::OnceLock;

// Global lock to prevent race conditions when modifying environment variables in tests
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn get_env_lock() -> &'static Mutex<()> {
    ENV_LOCK.get_or_init(|| Mutex::new(()))
}

const POLICY_KEYS: [&str; 4] = [
    "WAIT_LONG_RATIO",
    "WAIT_SHORT_RATIO",
    "WAIT_LONG_DAYS",
    "WAIT_SHORT_DAYS",
];

fn clear_policy_env() {
    for key in POLICY_KEYS {
        // SAFETY: all tests touching the environment hold ENV_LOCK.
        unsafe { env::remove_var(key) };
    }
}

#[test]
fn test_policy_defaults_from_clean_env() {
    let _guard = get_env_lock().lock().unwrap();
    clear_policy_env();

    let policy = AdvisoryPolicy::from_env().unwrap();
    assert_eq!(policy, AdvisoryPolicy::default());
}

#[test]
fn test_policy_env_overrides() {
    let _guard = get_env_lock().lock().unwrap();
    clear_policy_env();
    // SAFETY: ENV_LOCK held.
    unsafe {
        env::set_var("WAIT_LONG_RATIO", "1.25");
        env::set_var("WAIT_SHORT_RATIO", "1.12");
        env::set_var("WAIT_LONG_DAYS", "21");
        env::set_var("WAIT_SHORT_DAYS", "10");
    }

    let policy = AdvisoryPolicy::from_env().unwrap();
    assert_eq!(policy.wait_long_ratio, dec!(1.25));
    assert_eq!(policy.wait_short_ratio, dec!(1.12));
    assert_eq!(policy.wait_long_days, 21);
    assert_eq!(policy.wait_short_days, 10);

    clear_policy_env();
}

#[test]
fn test_policy_rejects_inverted_ratios_from_env() {
    let _guard = get_env_lock().lock().unwrap();
    clear_policy_env();
    // SAFETY: ENV_LOCK held.
    unsafe {
        env::set_var("WAIT_LONG_RATIO", "1.05");
        env::set_var("WAIT_SHORT_RATIO", "1.10");
    }

    assert!(AdvisoryPolicy::from_env().is_err());

    clear_policy_env();
}

#[test]
fn test_policy_rejects_unparsable_ratio() {
    let _guard = get_env_lock().lock().unwrap();
    clear_policy_env();
    // SAFETY: ENV_LOCK held.
    unsafe { env::set_var("WAIT_LONG_RATIO", "plenty") };

    assert!(AdvisoryPolicy::from_env().is_err());

    clear_policy_env();
}
