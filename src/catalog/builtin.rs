//! Built-in catalog data.

use crate::model::categories::{
    COLLABORATION, DOCUMENTATION, MAINTAINABILITY, RELIABILITY, SECURITY, VELOCITY,
};
use crate::model::{Effort, Impact, Question, Recommendation, Stage};

const FROM_SEED: &[Stage] = &[Stage::Seed, Stage::SeriesA, Stage::SeriesB];
const GROWTH: &[Stage] = &[Stage::SeriesA, Stage::SeriesB];

pub(super) fn questions() -> Vec<Question> {
    vec![
        // Security
        Question::new(
            "sec-dependency-scanning",
            "Are dependencies scanned automatically for known vulnerabilities?",
            SECURITY,
        )
        .with_weight(1.5),
        Question::new(
            "sec-secret-management",
            "Are secrets kept out of source control and rotated on a schedule?",
            SECURITY,
        )
        .with_weight(1.5),
        Question::new(
            "sec-branch-protection",
            "Is branch protection enforced on the default branch?",
            SECURITY,
        ),
        Question::new(
            "sec-security-review",
            "Do changes to authentication or data access get a dedicated security review?",
            SECURITY,
        )
        .with_stages(GROWTH),
        // Reliability
        Question::new(
            "rel-ci-pipeline",
            "Does every change run through an automated CI pipeline?",
            RELIABILITY,
        )
        .with_weight(1.5),
        Question::new(
            "rel-test-coverage",
            "Is test coverage tracked and kept above an agreed floor?",
            RELIABILITY,
        ),
        Question::new(
            "rel-incident-response",
            "Is there an on-call rotation with an incident runbook?",
            RELIABILITY,
        )
        .with_stages(FROM_SEED),
        Question::new(
            "rel-slo",
            "Are service level objectives defined and monitored?",
            RELIABILITY,
        )
        .with_stages(GROWTH),
        // Maintainability
        Question::new(
            "mnt-code-review",
            "Is every change reviewed by at least one other engineer?",
            MAINTAINABILITY,
        )
        .with_weight(1.5),
        Question::new(
            "mnt-linting",
            "Are formatting and linting enforced automatically?",
            MAINTAINABILITY,
        ),
        Question::new(
            "mnt-dependency-updates",
            "Are dependencies updated on a regular cadence?",
            MAINTAINABILITY,
        ),
        Question::new(
            "mnt-tech-debt",
            "Is technical debt tracked and scheduled alongside feature work?",
            MAINTAINABILITY,
        )
        .with_stages(FROM_SEED),
        // Collaboration
        Question::new(
            "col-pr-templates",
            "Do pull requests follow a template with context and testing notes?",
            COLLABORATION,
        ),
        Question::new(
            "col-codeowners",
            "Are code owners defined for critical paths?",
            COLLABORATION,
        )
        .with_stages(FROM_SEED),
        Question::new(
            "col-issue-triage",
            "Are incoming issues triaged within an agreed time?",
            COLLABORATION,
        ),
        Question::new(
            "col-knowledge-sharing",
            "Do engineers share knowledge through design reviews or demos?",
            COLLABORATION,
        )
        .with_stages(GROWTH),
        // Velocity
        Question::new(
            "vel-deploy-frequency",
            "Do you deploy to production at least weekly?",
            VELOCITY,
        )
        .with_weight(1.5),
        Question::new(
            "vel-lead-time",
            "Is lead time from commit to production under one day?",
            VELOCITY,
        ),
        Question::new(
            "vel-small-batches",
            "Are pull requests kept small and merged within two days?",
            VELOCITY,
        ),
        Question::new(
            "vel-feature-flags",
            "Do you ship behind feature flags to decouple deploy from release?",
            VELOCITY,
        )
        .with_stages(FROM_SEED),
        // Documentation
        Question::new(
            "doc-readme",
            "Does the README get a new engineer running locally?",
            DOCUMENTATION,
        ),
        Question::new(
            "doc-architecture",
            "Are architecture decisions recorded?",
            DOCUMENTATION,
        )
        .with_stages(FROM_SEED),
        Question::new(
            "doc-api",
            "Are public and internal APIs documented?",
            DOCUMENTATION,
        ),
        Question::new(
            "doc-onboarding",
            "Is there an onboarding guide for new engineers?",
            DOCUMENTATION,
        )
        .with_stages(GROWTH),
    ]
}

pub(super) fn recommendations() -> Vec<Recommendation> {
    vec![
        // Gap-based: selected when the category is below its stage benchmark
        Recommendation::new(
            "sec-dependency-alerts",
            SECURITY,
            "Enable automated dependency alerts",
            Impact::High,
            Effort::Low,
        )
        .with_description("Get notified about vulnerable dependencies as soon as advisories land.")
        .with_actions(&[
            "Turn on Dependabot (or Renovate) alerts for every repository",
            "Route alerts to the owning team's channel",
            "Agree on a patch window for critical advisories",
        ])
        .automatable(),
        Recommendation::new(
            "sec-secret-scanning",
            SECURITY,
            "Turn on secret scanning with push protection",
            Impact::High,
            Effort::Low,
        )
        .with_description("Block credentials from reaching the repository in the first place.")
        .with_actions(&[
            "Enable secret scanning and push protection",
            "Rotate any credential found in history",
            "Move runtime secrets into a managed secret store",
        ])
        .automatable(),
        Recommendation::new(
            "sec-branch-protection",
            SECURITY,
            "Protect the default branch",
            Impact::High,
            Effort::Low,
        )
        .with_description("Prevent force pushes and unreviewed merges to the main line.")
        .with_actions(&[
            "Require pull requests for the default branch",
            "Disallow force pushes and deletions",
        ])
        .automatable(),
        Recommendation::new(
            "sec-threat-model",
            SECURITY,
            "Threat-model the critical user flows",
            Impact::High,
            Effort::High,
        )
        .with_description("Identify the attack surface of authentication, payments and data export.")
        .with_actions(&[
            "List the flows that handle credentials or customer data",
            "Run a one-hour STRIDE session per flow",
            "File the resulting mitigations as tracked issues",
        ]),
        Recommendation::new(
            "rel-required-checks",
            RELIABILITY,
            "Require CI checks before merge",
            Impact::High,
            Effort::Low,
        )
        .with_description("A red build should never reach the default branch.")
        .with_actions(&[
            "Mark the CI workflow as a required status check",
            "Fail the build on test or lint errors",
        ])
        .automatable(),
        Recommendation::new(
            "rel-coverage-floor",
            RELIABILITY,
            "Track coverage and enforce a floor",
            Impact::Medium,
            Effort::Medium,
        )
        .with_description("Make test coverage visible and stop it from silently eroding.")
        .with_actions(&[
            "Publish coverage from CI on every pull request",
            "Set a floor at the current value and ratchet it upwards",
        ])
        .automatable(),
        Recommendation::new(
            "rel-incident-runbook",
            RELIABILITY,
            "Write an incident runbook and on-call rotation",
            Impact::High,
            Effort::Medium,
        )
        .with_description("Know who responds to an outage and what they do first.")
        .with_actions(&[
            "Define severity levels and escalation paths",
            "Set up a rotation with paging",
            "Hold a blameless review after every major incident",
        ]),
        Recommendation::new(
            "mnt-required-reviews",
            MAINTAINABILITY,
            "Require an approving review on every pull request",
            Impact::High,
            Effort::Low,
        )
        .with_description("Spread context and catch defects before they merge.")
        .with_actions(&[
            "Require at least one approval in branch protection",
            "Dismiss stale approvals when new commits are pushed",
        ])
        .automatable(),
        Recommendation::new(
            "mnt-lint-in-ci",
            MAINTAINABILITY,
            "Enforce formatting and linting in CI",
            Impact::Medium,
            Effort::Low,
        )
        .with_description("Keep style discussions out of code review.")
        .with_actions(&[
            "Add formatter and linter checks to the CI workflow",
            "Provide a pre-commit hook for local runs",
        ])
        .automatable(),
        Recommendation::new(
            "mnt-debt-budget",
            MAINTAINABILITY,
            "Reserve capacity for technical debt",
            Impact::Medium,
            Effort::High,
        )
        .with_description("Make debt reduction part of planning instead of an afterthought.")
        .with_actions(&[
            "Label debt issues consistently",
            "Reserve a fixed share of each cycle for them",
        ]),
        Recommendation::new(
            "col-pr-template",
            COLLABORATION,
            "Add a pull request template",
            Impact::Medium,
            Effort::Low,
        )
        .with_description("Give reviewers the context they need without asking.")
        .with_actions(&[
            "Add a template with summary, testing and rollout sections",
            "Link the related issue from every pull request",
        ])
        .automatable(),
        Recommendation::new(
            "col-codeowners",
            COLLABORATION,
            "Define code owners for critical paths",
            Impact::Medium,
            Effort::Low,
        )
        .with_description("Route reviews to the people who know the code.")
        .with_actions(&["Add a CODEOWNERS file", "Require code owner review on protected paths"])
        .automatable(),
        Recommendation::new(
            "col-design-reviews",
            COLLABORATION,
            "Hold regular design reviews",
            Impact::Medium,
            Effort::Medium,
        )
        .with_description("Discuss significant changes before the code is written.")
        .with_actions(&[
            "Write a short design doc for multi-week efforts",
            "Review it with at least one engineer from another team",
        ]),
        Recommendation::new(
            "vel-continuous-deploy",
            VELOCITY,
            "Deploy automatically from the default branch",
            Impact::High,
            Effort::High,
        )
        .with_description("Remove manual release steps so every merge can ship.")
        .with_actions(&[
            "Script the deployment end to end",
            "Trigger it from the CI pipeline after merge",
            "Add automated rollback on failed health checks",
        ])
        .automatable(),
        Recommendation::new(
            "vel-small-prs",
            VELOCITY,
            "Keep pull requests small and short-lived",
            Impact::Medium,
            Effort::Low,
        )
        .with_description("Smaller changes are reviewed faster and fail less often.")
        .with_actions(&[
            "Aim for changes under 400 lines",
            "Use feature flags to merge incomplete work safely",
        ]),
        Recommendation::new(
            "doc-readme-quickstart",
            DOCUMENTATION,
            "Add a quickstart to the README",
            Impact::Medium,
            Effort::Low,
        )
        .with_description("A new engineer should run the project locally in under an hour.")
        .with_actions(&[
            "Document prerequisites and setup commands",
            "Verify the steps on a clean machine",
        ]),
        Recommendation::new(
            "doc-decision-records",
            DOCUMENTATION,
            "Record architecture decisions",
            Impact::Low,
            Effort::Low,
        )
        .with_description("Capture why the system looks the way it does.")
        .with_actions(&["Add a docs/adr directory with a template", "Write an ADR for the next significant decision"]),
        // Range-based stage templates
        Recommendation::new(
            "tpl-pre-seed-security-basics",
            SECURITY,
            "Establish security basics before raising",
            Impact::High,
            Effort::Low,
        )
        .with_description("Investors increasingly ask about basic hygiene during diligence.")
        .with_actions(&[
            "Enable two-factor authentication for the organization",
            "Remove former collaborators",
            "Turn on dependency alerts",
        ])
        .with_range(0.0, 40.0)
        .for_stage(Stage::PreSeed)
        .automatable(),
        Recommendation::new(
            "tpl-seed-reliability-foundation",
            RELIABILITY,
            "Build a reliability foundation",
            Impact::High,
            Effort::Medium,
        )
        .with_description("Early customers notice outages more than missing features.")
        .with_actions(&[
            "Add uptime monitoring for the production entry points",
            "Run the test suite on every pull request",
            "Document how to roll back a bad deploy",
        ])
        .with_range(0.0, 45.0)
        .for_stage(Stage::Seed),
        Recommendation::new(
            "tpl-series-a-security-program",
            SECURITY,
            "Formalize a security program",
            Impact::High,
            Effort::High,
        )
        .with_description("Enterprise customers will start sending security questionnaires.")
        .with_actions(&[
            "Name an owner for security",
            "Write a vulnerability disclosure policy",
            "Schedule an external penetration test",
        ])
        .with_range(0.0, 60.0)
        .for_stage(Stage::SeriesA),
        Recommendation::new(
            "tpl-series-a-delivery-tooling",
            VELOCITY,
            "Invest in delivery tooling",
            Impact::Medium,
            Effort::Medium,
        )
        .with_description("A growing team needs a pipeline that scales with it.")
        .with_actions(&[
            "Measure deployment frequency and lead time",
            "Parallelize the slowest CI stages",
        ])
        .with_range(0.0, 50.0)
        .for_stage(Stage::SeriesA)
        .automatable(),
        Recommendation::new(
            "tpl-series-b-compliance-readiness",
            SECURITY,
            "Prepare for a SOC 2 audit",
            Impact::High,
            Effort::High,
        )
        .with_description("Compliance attestations unblock larger deals at this stage.")
        .with_actions(&[
            "Pick a compliance automation platform",
            "Map existing controls to the trust service criteria",
            "Close gaps in access reviews and change management",
        ])
        .with_range(0.0, 75.0)
        .for_stage(Stage::SeriesB),
    ]
}
