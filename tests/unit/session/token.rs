use super::*;

#[test]
fn fresh_tokens_are_not_cancelled() {
    assert!(!RenderToken::new().is_cancelled());
}

#[test]
fn cancel_is_one_way_and_idempotent() {
    let token = RenderToken::new();
    token.cancel();
    assert!(token.is_cancelled());
    token.cancel();
    assert!(token.is_cancelled());
}

#[test]
fn clones_observe_the_same_flag() {
    let token = RenderToken::new();
    let continuation = token.clone();
    token.cancel();
    assert!(continuation.is_cancelled());
}
