//! Property-based tests for message aggregation.
//!
//! A scripted engine hands back a fixed list of violations so the gateway's
//! post-processing can be checked against arbitrary message lists.

use checkpost_gateway::prelude::*;
use checkpost_gateway::MESSAGE_DELIMITER;
use proptest::prelude::*;

struct Scripted(Vec<Violation>);

impl<T: ?Sized> ConstraintEngine<T> for Scripted {
    fn validate(&self, _: &T, _: &[Group]) -> Result<Vec<Violation>, EngineError> {
        Ok(self.0.clone())
    }

    fn validate_property(
        &self,
        _: &T,
        property: &str,
        _: &[Group],
    ) -> Result<Vec<Violation>, EngineError> {
        Ok(self
            .0
            .iter()
            .filter(|violation| violation.is_under(property))
            .cloned()
            .collect())
    }
}

fn gateway(messages: &[String]) -> ValidationGateway<Scripted> {
    let violations = messages
        .iter()
        .enumerate()
        .map(|(i, message)| Violation::new(format!("field{i}"), "scripted", message.clone()))
        .collect();
    ValidationGateway::with_engine(Some(Scripted(violations))).unwrap()
}

fn expected(messages: &[String]) -> Result<(), GatewayError> {
    let kept: Vec<&str> = messages
        .iter()
        .map(String::as_str)
        .filter(|message| !message.trim().is_empty())
        .collect();

    if kept.is_empty() {
        Ok(())
    } else {
        Err(GatewayError::Violations(kept.join(MESSAGE_DELIMITER)))
    }
}

// ============================================================================
// AGGREGATION: result == join(non-blank messages) in engine order
// ============================================================================

proptest! {
    #[test]
    fn aggregate_matches_joined_non_blank(messages in prop::collection::vec("[ a-z]{0,8}", 0..8)) {
        let gateway = gateway(&messages);
        prop_assert_eq!(gateway.validate(&(), &[]), expected(&messages));
    }

    #[test]
    fn blank_only_is_success(messages in prop::collection::vec("[ \t]{0,4}", 0..6)) {
        let gateway = gateway(&messages);
        prop_assert_eq!(gateway.validate(&(), &[]), Ok(()));
    }

    #[test]
    fn validation_is_idempotent(messages in prop::collection::vec("[a-z]{1,8}", 0..6)) {
        let gateway = gateway(&messages);
        let first = gateway.validate("subject", &[]);
        let second = gateway.validate("subject", &[]);
        prop_assert_eq!(first, second);
    }
}

// ============================================================================
// PROPERTY: only the named property's messages survive
// ============================================================================

proptest! {
    #[test]
    fn property_keeps_its_own_message(messages in prop::collection::vec("[a-z]{1,8}", 1..6), pick in 0usize..6) {
        let pick = pick % messages.len();
        let gateway = gateway(&messages);

        let result = gateway.validate_property(&(), &format!("field{pick}"), &[]);
        prop_assert_eq!(result, Err(GatewayError::Violations(messages[pick].clone())));
    }
}
