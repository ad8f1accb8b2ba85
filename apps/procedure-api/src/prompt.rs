//! Prompt construction for procedure generation

use std::collections::BTreeMap;

use crate::models::AnswerEntry;

/// Rewriting instructions sent as the first part of the system prompt.
/// The template's own text is appended so the model echoes the exact
/// section headings the assembler matches against.
pub const INSTRUCTION_PROMPT: &str = "You are given brief, informal answers from a subject-matter expert (SME). Your task is to convert those answers into a **formal, auditor-quality standard operating procedure (SOP)**.\n\n\
The output must be clear, structured, and repeatable, suitable for internal control, governance, or audit review.\n\n\
**Document Template / Structure**\n\
Use the following headings (and sub-structure) in every procedure:\n\n\
1. Procedure Name\n\
2. Owner / Performer (role, team, or individual)\n\
3. Frequency (e.g. daily, weekly, monthly, quarterly, ad hoc)\n\
4. Purpose / Risk Mitigation\n\
5. Procedure Steps (numbered)\n\
6. Tools & Systems Used\n\
7. Access / Permissions Required\n\
8. Starting Point (where work begins)\n\
9. Checks & Criteria (standards, thresholds, rules)\n\
10. Exception / Failure Handling (escalation, remediation)\n\
11. Dependencies / Inputs\n\
12. Approvals / Sign-off\n\
13. Evidence / Records Storage\n\
14. Work Location / Team (onsite, remote, regional)\n\
15. Versioning & Review Information (effective date, next review)\n\n\
**Language & Style Guidance**\n\
- Use formal, compliance-style language: e.g. \"This procedure ensures ...\", \"In the event of failure ...\", \"Escalation is performed to ...\".\n\
- If the SME answer is shorthand or partial, expand into clear, full sentences.\n\
- Do *not* invent critical facts; if something isn't provided, mark a placeholder (e.g. \"[TBD: Approver]\") rather than guessing.\n\
- Maintain numbering consistency and clear hierarchy.\n\
- Emphasize **traceability**: each step should map to the checks & criteria, and evidence storage should link to steps.\n\n\
**Process**\n\
1. You will be given a set of answer pairs: a \"Question\" and \"SME's short answer.\"\n\
2. Reformulate into the full procedure document following the template above.\n\
3. If any essential information is missing (e.g. approval role), flag it as needing input.";

/// System prompt: rewriting instructions plus the template's full text.
pub fn build_system_prompt(template_text: &str) -> String {
    format!("{INSTRUCTION_PROMPT}\n\n{template_text}")
}

/// Q/A transcript sent as the user prompt, one pair per answered
/// question, in key order.
pub fn format_transcript(answers: &BTreeMap<String, AnswerEntry>) -> String {
    let mut transcript = String::new();
    for entry in answers.values() {
        transcript.push_str(&format!("Q: {}\nA: {}\n\n", entry.question, entry.answer));
    }
    transcript
}
