//! End-to-end flows against the mock host.

use std::cell::RefCell;
use std::rc::Rc;

use h5kit::host::{MockHost, Navigation};
use h5kit::web::{get_hash_router_query_string, get_run_time_env_is_wx, user_source};
use h5kit::{
    CountDownOptions, DeviceFamily, Easing, GoH5Options, LoadError, ScrollOptions, count_down,
    date_range, go_h5, insert_script, load_image, scroll_to_y, validate_phone,
};

const WECHAT_ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 12; M2012K11AC) \
    AppleWebKit/537.36 (KHTML, like Gecko) Mobile Safari/537.36 MicroMessenger/8.0.38";

#[test]
fn sms_login_flow() {
    let host = MockHost::new()
        .with_user_agent(WECHAT_ANDROID_UA)
        .with_location("https://m.example.com/index.html#/login?redirect=%2Forders");

    assert!(get_run_time_env_is_wx(&host));
    assert_eq!(user_source(&host), DeviceFamily::Android);
    assert_eq!(get_hash_router_query_string(&host), "?redirect=%2Forders");

    assert!(validate_phone(" 13912345678 "));

    // Resend button counts down 3..0 after sending the code
    let labels = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&labels);
    let resend = count_down(
        &host,
        3.0,
        Some(move |n: f64| sink.borrow_mut().push(format!("{}s", n))),
        CountDownOptions::default(),
    );
    while host.tick_intervals() > 0 {}
    assert_eq!(*labels.borrow(), vec!["3s", "2s", "1s", "0s"]);
    assert!(!resend.is_active());

    go_h5(
        &host,
        &GoH5Options {
            new_page: false,
            ..GoH5Options::new("/orders")
        },
    );
    assert_eq!(
        host.navigations(),
        vec![Navigation::Replace("https://m.example.com/#/orders".to_string())]
    );
}

#[test]
fn report_page_flow() {
    let host = MockHost::new().with_scroll_y(2400.0);

    let weeks = date_range("2021-01", "2021-04", "w").unwrap();
    assert_eq!(weeks, vec!["2021-01", "2021-02", "2021-03", "2021-04"]);

    let animation = scroll_to_y(
        &host,
        ScrollOptions {
            easing: Easing::EaseInOutSine,
            ..Default::default()
        },
    );
    host.run_all_frames(1000);
    assert!(animation.is_finished());
    assert_eq!(host.scroll_history().last().copied(), Some(0.0));
}

#[tokio::test]
async fn lazy_loading_flow() {
    let host = MockHost::new().with_failing_resource("https://cdn.example.com/map.js");

    insert_script(&host, "https://cdn.example.com/chart.js")
        .await
        .unwrap();
    let err = insert_script(&host, "https://cdn.example.com/map.js")
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::Script { .. }));

    let banner = load_image(&host, "https://cdn.example.com/banner.webp")
        .await
        .unwrap();
    assert_eq!(banner, "https://cdn.example.com/banner.webp");
    assert_eq!(host.scripts(), vec!["https://cdn.example.com/chart.js"]);
}
