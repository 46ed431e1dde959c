use crate::models::lead_models::CrmFormId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    Contact,
    DemoInfo,
    DemoRequest,
    Support,
    FeatureGuide,
    SecurityWhitepaper,
    PublicAiWhitepaper,
    Siglite,
    ResourceDownload,
}

/// Whether a CRM failure fails the whole request or is logged and tolerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailPolicy {
    /// CRM failure -> 500, no partial success.
    Hard,
    /// CRM failure is logged; the promised artifact or redirect is still
    /// delivered. Lead tracking never blocks resource delivery.
    Soft,
}

/// How the submitted name arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStyle {
    /// Single free-text `name` field, split on the first whitespace.
    Split,
    /// Separate `firstName` / `lastName` fields.
    Direct,
}

/// Shape of the success response for a flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessShape {
    /// 200 `{success, message, data}` echoing the CRM result.
    Message { message: &'static str },
    /// 200 `{success, downloadUrl, message}` with a fixed artifact.
    Download {
        url: &'static str,
        title: &'static str,
        resource_type: &'static str,
    },
    /// 200 `{success, downloadUrl, message}` echoing the submitted locator.
    EchoDownload,
    /// 303 redirect to a fixed path under the frontend origin.
    Redirect { path: &'static str },
}

pub struct FlowDescriptor {
    pub kind: FlowKind,
    /// Route under the public API, also used in log lines and error bodies.
    pub path: &'static str,
    pub label: &'static str,
    pub form: CrmFormId,
    pub required: &'static [&'static str],
    pub name_style: NameStyle,
    pub lead_source: &'static str,
    pub lead_type: &'static str,
    pub tags: &'static [&'static str],
    /// Raw field -> CRM custom-field key, copied only when present.
    pub passthrough: &'static [(&'static str, &'static str)],
    pub fail_policy: FailPolicy,
    pub success: SuccessShape,
}

pub const FLOWS: &[FlowDescriptor] = &[
    FlowDescriptor {
        kind: FlowKind::Contact,
        path: "/api/contact",
        label: "contact",
        form: CrmFormId::Contact,
        required: &["name", "email", "message"],
        name_style: NameStyle::Split,
        lead_source: "contact_form",
        lead_type: "inquiry",
        tags: &["website", "contact-form"],
        passthrough: &[("message", "message"), ("persona", "persona")],
        fail_policy: FailPolicy::Hard,
        success: SuccessShape::Message {
            message: "Thanks for reaching out. We'll be in touch shortly.",
        },
    },
    FlowDescriptor {
        kind: FlowKind::DemoInfo,
        path: "/api/demo-info",
        label: "demo info",
        form: CrmFormId::Demo,
        required: &["firstName", "lastName", "email", "firm"],
        name_style: NameStyle::Direct,
        lead_source: "demo_request",
        lead_type: "demo",
        tags: &["website", "demo"],
        passthrough: &[("persona", "persona"), ("primaryPain", "primary_pain")],
        fail_policy: FailPolicy::Hard,
        success: SuccessShape::Message {
            message: "Demo request received. Our team will reach out to schedule.",
        },
    },
    FlowDescriptor {
        kind: FlowKind::DemoRequest,
        path: "/api/demo-request",
        label: "demo request",
        form: CrmFormId::Demo,
        required: &["name", "email"],
        name_style: NameStyle::Split,
        lead_source: "demo_request",
        lead_type: "demo",
        tags: &["website", "demo", "modal"],
        passthrough: &[],
        fail_policy: FailPolicy::Soft,
        success: SuccessShape::Redirect {
            path: "/demo-thank-you",
        },
    },
    FlowDescriptor {
        kind: FlowKind::Support,
        path: "/api/support",
        label: "support",
        form: CrmFormId::Support,
        required: &["name", "email", "subject", "message"],
        name_style: NameStyle::Split,
        lead_source: "support_ticket",
        lead_type: "support",
        tags: &["website", "support"],
        passthrough: &[
            ("subject", "subject"),
            ("priority", "priority"),
            ("message", "message"),
        ],
        fail_policy: FailPolicy::Hard,
        success: SuccessShape::Message {
            message: "Support request received. We'll get back to you soon.",
        },
    },
    FlowDescriptor {
        kind: FlowKind::FeatureGuide,
        path: "/api/feature-guide",
        label: "feature guide",
        form: CrmFormId::FeatureGuide,
        required: &["name", "email", "company"],
        name_style: NameStyle::Split,
        lead_source: "feature_guide",
        lead_type: "content_download",
        tags: &["website", "feature-guide"],
        passthrough: &[],
        fail_policy: FailPolicy::Soft,
        success: SuccessShape::Download {
            url: "/docs/sapphire_legalai_features.pdf",
            title: "Feature Guide",
            resource_type: "guide",
        },
    },
    FlowDescriptor {
        kind: FlowKind::SecurityWhitepaper,
        path: "/api/security-whitepaper",
        label: "security whitepaper",
        form: CrmFormId::SecurityWhitepaper,
        required: &["name", "email", "company"],
        name_style: NameStyle::Split,
        lead_source: "security_whitepaper",
        lead_type: "content_download",
        tags: &["website", "security-whitepaper"],
        passthrough: &[],
        fail_policy: FailPolicy::Soft,
        success: SuccessShape::Download {
            url: "/docs/sapphire_legalai_security_whitepaper.pdf",
            title: "Security Whitepaper",
            resource_type: "whitepaper",
        },
    },
    FlowDescriptor {
        kind: FlowKind::PublicAiWhitepaper,
        path: "/api/public-ai-whitepaper",
        label: "public AI whitepaper",
        form: CrmFormId::PublicAiWhitepaper,
        required: &["name", "email", "company"],
        name_style: NameStyle::Split,
        lead_source: "public_ai_whitepaper",
        lead_type: "content_download",
        tags: &["website", "public-ai-whitepaper"],
        passthrough: &[],
        fail_policy: FailPolicy::Soft,
        success: SuccessShape::Download {
            url: "/docs/sapphire_legalai_public_ai_whitepaper.pdf",
            title: "Public AI Whitepaper",
            resource_type: "whitepaper",
        },
    },
    FlowDescriptor {
        kind: FlowKind::Siglite,
        path: "/api/siglite",
        label: "SIG Lite",
        form: CrmFormId::Siglite,
        required: &["name", "email", "company"],
        name_style: NameStyle::Split,
        lead_source: "siglite",
        lead_type: "content_download",
        tags: &["website", "siglite"],
        passthrough: &[],
        fail_policy: FailPolicy::Soft,
        success: SuccessShape::Download {
            url: "/docs/sapphire_legalai_sig_lite.pdf",
            title: "SIG Lite Questionnaire",
            resource_type: "questionnaire",
        },
    },
    FlowDescriptor {
        kind: FlowKind::ResourceDownload,
        path: "/api/resource-download",
        label: "resource download",
        // Generic resources enroll the lead on the nurture list; the
        // artifact itself travels in the resource custom fields.
        form: CrmFormId::Newsletter,
        required: &["name", "email", "company", "resourceTitle", "downloadUrl"],
        name_style: NameStyle::Split,
        lead_source: "resource_download",
        lead_type: "content_download",
        tags: &["website", "resources"],
        passthrough: &[
            ("resourceTitle", "resource_title"),
            ("resourceType", "resource_type"),
            ("downloadUrl", "download_url"),
        ],
        fail_policy: FailPolicy::Soft,
        success: SuccessShape::EchoDownload,
    },
];

pub fn descriptor(kind: FlowKind) -> &'static FlowDescriptor {
    FLOWS
        .iter()
        .find(|flow| flow.kind == kind)
        .expect("every flow kind has a descriptor entry")
}
