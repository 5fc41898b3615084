use claimcheck_core::{ClaimVerifier, EvidenceItem, Verdict};

#[test]
fn cross_verified_claim_is_marked_verified() {
    let verifier = ClaimVerifier::default();
    let evidence: Vec<EvidenceItem> = serde_json::from_str(
        r#"[
            {"title": "OpenAI News", "snippet": "Sam Altman is the CEO of OpenAI as of 2024."},
            "The current head of OpenAI is Sam Altman.",
            "Mira Murati is the CTO."
        ]"#,
    )
    .expect("evidence should parse");

    let result = verifier.verify("Sam Altman is OpenAI CEO", &evidence);

    assert_eq!(
        result.verdict,
        Verdict::Verified,
        "two independent sources should verify: {result:?}"
    );
    assert_eq!(result.matches, 2);
}

#[test]
fn result_serializes_to_canonical_schema() {
    let verifier = ClaimVerifier::default();
    let evidence = vec![EvidenceItem::text(
        "The current repo rate is 6.50% as announced by RBI.",
    )];

    let result = verifier.verify("The current repo rate is 6.50%", &evidence);
    let json = serde_json::to_value(&result).expect("result should serialize");

    assert_eq!(json["verdict"], "SINGLE_SOURCE");
    assert_eq!(json["matches"], 1);
    assert_eq!(json["is_synthesizable"], true);
    assert_eq!(json["claim"], "The current repo rate is 6.50%");
    assert!(
        json.get("reason").is_none(),
        "reason should be omitted outside sentinel outcomes: {json}"
    );
}

#[test]
fn sentinel_result_serializes_with_reason() {
    let verifier = ClaimVerifier::default();
    let result = verifier.verify("anything", &[]);
    let json = serde_json::to_value(&result).expect("result should serialize");

    assert_eq!(json["verdict"], "NO_EVIDENCE");
    assert_eq!(json["confidence"], 0.0);
    assert!(json["reason"].is_string(), "sentinel carries a reason: {json}");
}

#[test]
fn roundtrip_through_json_preserves_result() {
    let verifier = ClaimVerifier::default();
    let evidence = vec![
        EvidenceItem::text("RBI kept the repo rate unchanged at 6.50%."),
        EvidenceItem::titled("Business Daily", "The current repo rate is 6.50%."),
    ];

    let result = verifier.verify("The current repo rate is 6.50%", &evidence);
    let json = serde_json::to_string(&result).expect("serialize");
    let parsed = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(result, parsed);
}
