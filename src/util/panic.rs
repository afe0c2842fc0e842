/// Extracts the message from a panic payload, if it was raised with a string.
#[cfg(test)]
pub fn payload_message(payload: &(dyn std::any::Any + Send)) -> Option<&str> {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
}

/// Asserts that the block panics. With a message pattern, also asserts that the panic message
/// contains it, which shows the panic reached the caller unchanged.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert!(
            std::panic::catch_unwind(|| $run).is_err(),
            "assertion failed to panic"
        );
    };
    ($run:block, $expected:literal) => {
        match std::panic::catch_unwind(|| $run) {
            Ok(_) => panic!("assertion failed to panic"),
            Err(payload) => {
                let message = $crate::util::panic::payload_message(&*payload);
                assert!(
                    message.is_some_and(|m| m.contains($expected)),
                    "panic message {:?} should contain {:?}",
                    message,
                    $expected
                );
            }
        }
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
