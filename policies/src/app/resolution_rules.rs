//! Rules for solution codes with modeled behaviour

use chrono::{DateTime, Utc};

use crate::domain::entities::{Policy, Recommendation};

/// Days a policy may stay in provisioning before a claim needs a person
pub const PROVISION_WINDOW_DAYS: i64 = 15;

const DEFAULT_REJECTION_REASON: &str = "No se especificó motivo de rechazo";

/// Whole days elapsed since the policy was created (midnight UTC)
pub fn elapsed_days(policy: &Policy, now: DateTime<Utc>) -> Option<i64> {
    let created = policy.created_on()?.and_hms_opt(0, 0, 0)?.and_utc();
    Some((now - created).num_seconds().div_euclid(86_400))
}

/// Claim about a policy that is taking too long to provision
pub fn fx_provision(policy: &Policy, now: DateTime<Utc>) -> Recommendation {
    if !policy.is_in_provision() {
        return Recommendation::close(
            "La póliza ya ha finalizado su tramitación y no se encuentra en estado de provisión",
        );
    }

    let Some(days) = elapsed_days(policy, now) else {
        return Recommendation::manual(format!(
            "La fecha de creación de la póliza ({}) no es válida, requiere revisión manual",
            policy.created_at
        ));
    };

    if days > PROVISION_WINDOW_DAYS {
        return Recommendation::manual(format!(
            "La póliza lleva más de {} días en provisión, requiere revisión manual",
            PROVISION_WINDOW_DAYS
        ));
    }

    Recommendation::close(format!(
        "La póliza aún está en fechas normales de provisión ({} días de {} permitidos) y se resolverá dentro de la fecha estipulada",
        days, PROVISION_WINDOW_DAYS
    ))
}

/// Customer disagrees with a rejection
pub fn nonconformity(policy: &Policy) -> Recommendation {
    if !policy.is_rejected() {
        return Recommendation::close(format!(
            "La póliza se encuentra en estado {}, no ha sido rechazada por lo que no procede la disconformidad",
            policy.status
        ));
    }

    let reason = policy
        .rejection_reason()
        .unwrap_or(DEFAULT_REJECTION_REASON);

    Recommendation::close(format!(
        "Lamentamos informarle que su póliza ha sido rechazada. Motivo: {}. Si considera que esta decisión es incorrecta, puede presentar una nueva solicitud con la documentación requerida",
        reason
    ))
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::domain::entities::AutomaticResolution;
    use crate::test_utils::{test_policy, test_policy_created_days_ago, test_rejected_policy};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 20, 12, 0, 0).unwrap()
    }

    #[test]
    fn elapsed_days_floors_partial_days() {
        let policy = test_policy("P", "en provision", "10/06/2025");
        assert_eq!(elapsed_days(&policy, now()), Some(10));
    }

    #[test]
    fn elapsed_days_for_future_creation_is_negative() {
        let policy = test_policy("P", "en provision", "21/06/2025");
        assert_eq!(elapsed_days(&policy, now()), Some(-1));
    }

    #[test]
    fn fx_provision_within_window_closes_with_day_count() {
        let policy = test_policy_created_days_ago("P", "en provision", now(), 10);
        let recommendation = fx_provision(&policy, now());
        assert_eq!(recommendation.automatic_resolution, AutomaticResolution::Close);
        assert!(recommendation.explanation.contains("10 días de 15"));
    }

    #[test]
    fn fx_provision_on_day_fifteen_still_closes() {
        let policy = test_policy_created_days_ago("P", "en provision", now(), 15);
        assert_eq!(
            fx_provision(&policy, now()).automatic_resolution,
            AutomaticResolution::Close
        );
    }

    #[test]
    fn fx_provision_past_window_is_manual() {
        let policy = test_policy_created_days_ago("P", "en provision", now(), 20);
        let recommendation = fx_provision(&policy, now());
        assert_eq!(recommendation.automatic_resolution, AutomaticResolution::Manual);
        assert!(recommendation.reassign_mailbox.is_empty());
    }

    #[test]
    fn fx_provision_for_finished_policy_closes() {
        let policy = test_policy_created_days_ago("P", "activa", now(), 40);
        let recommendation = fx_provision(&policy, now());
        assert_eq!(recommendation.automatic_resolution, AutomaticResolution::Close);
        assert!(recommendation.explanation.contains("ya ha finalizado"));
    }

    #[test]
    fn fx_provision_with_bad_date_is_manual() {
        let policy = test_policy("P", "en provision", "sin fecha");
        let recommendation = fx_provision(&policy, now());
        assert_eq!(recommendation.automatic_resolution, AutomaticResolution::Manual);
        assert!(recommendation.explanation.contains("sin fecha"));
    }

    #[test]
    fn nonconformity_on_rejected_policy_explains_reason() {
        let policy = test_rejected_policy("P", Some("Falta certificado médico"));
        let recommendation = nonconformity(&policy);
        assert_eq!(recommendation.automatic_resolution, AutomaticResolution::Close);
        assert!(recommendation.explanation.contains("Falta certificado médico"));
    }

    #[test]
    fn nonconformity_without_reason_uses_default_text() {
        let policy = test_rejected_policy("P", None);
        assert!(nonconformity(&policy)
            .explanation
            .contains(DEFAULT_REJECTION_REASON));
    }

    #[test]
    fn nonconformity_on_active_policy_is_moot() {
        let policy = test_policy("P", "activa", "01/01/2025");
        let recommendation = nonconformity(&policy);
        assert_eq!(recommendation.automatic_resolution, AutomaticResolution::Close);
        assert!(recommendation.explanation.contains("estado activa"));
    }

    #[test]
    fn window_boundary_is_exclusive() {
        let created = now() - Duration::days(PROVISION_WINDOW_DAYS + 1);
        let policy = test_policy(
            "P",
            "en provision",
            &created.format(crate::domain::entities::DATE_FORMAT).to_string(),
        );
        assert_eq!(
            fx_provision(&policy, now()).automatic_resolution,
            AutomaticResolution::Manual
        );
    }
}
