use dfd2gdpr_core::core::facts::{LegalBasisKind, RoleKind};
use dfd2gdpr_core::core::types::ProcessingKind;
use dfd2gdpr_core::{
    DataDictionary, DataFlowDiagram, Flow, Label, LabelType, Node, NodeKind, TransformConfig, TransformError, transform,
};

fn mk_dictionary() -> DataDictionary {
    DataDictionary::new(vec![
        LabelType::new("GDPRNode", vec![Label::new("use", "GDPR::ofType:UseageImpl")]),
        LabelType::new("GDPRElement", vec![Label::new("raw", "GDPR::InputData::Data:RawLog:d1")]),
        LabelType::new(
            "GDPRLink",
            vec![Label::new("consent", "GDPR::Consent:C:c1::Consentee::NaturalPerson:Alice:p1")],
        ),
        LabelType::new("Location", vec![Label::new("eu", "EU"), Label::new("us", "US")]),
    ])
}

#[test]
fn useage_node_with_input_data() {
    let mut dfd = DataFlowDiagram::new();
    dfd.add_node(Node::new("n1", "Analyse", NodeKind::Process).with_labels(["use", "raw"]));

    let out = transform(dfd, mk_dictionary(), &TransformConfig::default()).unwrap();

    let n1 = out.facts.processing_by_id("n1").unwrap();
    assert_eq!(n1.kind, ProcessingKind::Useage);
    assert_eq!(n1.input_data, vec!["d1"]);
    assert_eq!(out.facts.data.len(), 1);
    assert_eq!(out.facts.data[0].entity_name, "RawLog");
}

#[test]
fn shared_consent_link_materializes_and_applies_once() {
    let mut dfd = DataFlowDiagram::new();
    dfd.add_node(Node::new("a", "A", NodeKind::External).with_labels(["consent"]))
        .add_node(Node::new("b", "B", NodeKind::Process).with_labels(["consent"]));

    let out = transform(dfd, mk_dictionary(), &TransformConfig::default()).unwrap();

    assert_eq!(out.facts.legal_bases.len(), 1);
    assert_eq!(out.facts.involved_parties.len(), 1);
    assert_eq!(out.facts.involved_parties[0].kind, RoleKind::NaturalPerson);
    assert_eq!(
        out.facts.legal_bases[0].kind,
        LegalBasisKind::Consent { consentee: Some("p1".into()) }
    );
}

#[test]
fn every_node_traced_and_every_flow_preserved() {
    let mut dfd = DataFlowDiagram::new();
    dfd.add_node(Node::new("src", "Source", NodeKind::External))
        .add_node(Node::new("p", "Proc", NodeKind::Process).with_labels(["eu"]))
        .add_node(Node::new("st", "Store", NodeKind::Store))
        .add_flow(Flow::new("f1", "src", "p"))
        .add_flow(Flow::new("f2", "p", "st"))
        .add_flow(Flow::new("f3", "p", "src"));
    let input = dfd.clone();

    let out = transform(dfd, mk_dictionary(), &TransformConfig::default()).unwrap();

    for node in &input.nodes {
        let traces: Vec<_> = out.trace.traces.iter().filter(|t| t.node_id == node.id).collect();
        assert_eq!(traces.len(), 1);
        assert_eq!(traces[0].processing_id, node.id);
    }

    for flow in &input.flows {
        let source = out.facts.processing_by_id(&flow.source).unwrap();
        assert!(source.following.contains(&flow.destination));

        let fe = out.trace.flow_element(&flow.id).unwrap();
        assert_eq!(fe.source_id, flow.source);
        assert_eq!(fe.destination_id, flow.destination);
    }

    assert_eq!(out.facts.processing_by_id("src").unwrap().kind, ProcessingKind::Collecting);
    assert_eq!(out.facts.processing_by_id("p").unwrap().kind, ProcessingKind::Generic);
    assert_eq!(out.facts.processing_by_id("st").unwrap().kind, ProcessingKind::Storing);
    assert_eq!(out.dfd, input);
}

#[test]
fn dictionary_pruned_of_gdpr_types_only() {
    let original = mk_dictionary();
    let out = transform(DataFlowDiagram::new(), original.clone(), &TransformConfig::default()).unwrap();

    for name in ["GDPRElement", "GDPRNode", "GDPRLink"] {
        assert!(out.dictionary.label_type(name).is_none());
    }
    assert_eq!(out.dictionary.label_type("Location"), original.label_type("Location"));
    assert_eq!(out.dictionary.label_types.len(), 1);
}

#[test]
fn fatal_errors_return_no_output() {
    let dd = DataDictionary::new(vec![LabelType::new(
        "GDPRElement",
        vec![Label::new("bad", "GDPR::Owner::Controller:ACME:r1")],
    )]);
    let mut dfd = DataFlowDiagram::new();
    dfd.add_node(Node::new("n1", "A", NodeKind::Process).with_labels(["bad"]));

    let err = transform(dfd, dd, &TransformConfig::default()).unwrap_err();
    assert!(matches!(err, TransformError::UnsupportedLabelKind { category: "element role", .. }));
    assert!(err.to_string().contains("Owner"));
}
