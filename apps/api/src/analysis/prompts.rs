// Evaluation prompt templates, one per prompting mode. Each template carries
// exactly one {job_description} and one {resume_content} placeholder, filled
// by the composer. The worked examples in the one-shot and few-shot variants
// are fixed — there is no dynamic example retrieval or ranking.

/// Zero-shot: instruction only, no worked example.
pub const ZERO_SHOT_TEMPLATE: &str = r#"Evaluate the provided resume against the given job description.
Return a professional evaluation focusing on whether the candidate's profile
aligns with the role, highlighting strengths and weaknesses.

Job Description: {job_description}
Resume: {resume_content}

At the end of your response, always include a line:
"Relevance Percentage: XX%""#;

/// One-shot: a single worked example before the evaluation task.
pub const ONE_SHOT_TEMPLATE: &str = r#"Example:
Job Description: "Looking for a Full Stack Developer with React, Node.js, and Docker experience."
Resume: "3 years of experience in React, Node.js, and containerized applications with Docker."
Evaluation:
- Candidate matches all required skills.
- Relevance Percentage: 100%

Now evaluate the following:
Job Description: {job_description}
Resume: {resume_content}

At the end of your response, always include:
"Relevance Percentage: XX%""#;

/// Few-shot: multiple worked examples, including a partial match.
pub const FEW_SHOT_TEMPLATE: &str = r#"Example 1:
Job Description: "Data Scientist with Python, TensorFlow, and SQL."
Resume: "5 years in Python, TensorFlow, SQL, plus data analysis."
Evaluation:
- Excellent match for the requirements.
Relevance Percentage: 100%

Example 2:
Job Description: "Web Developer with HTML, CSS, JavaScript."
Resume: "Experience in HTML and CSS, but lacks JavaScript."
Evaluation:
- Partial match.
Relevance Percentage: 66.7%

Now evaluate the following:
Job Description: {job_description}
Resume: {resume_content}

At the end of your evaluation, include:
"Relevance Percentage: XX%""#;

/// Substituted for {resume_content} when the resume travels as an attached
/// page image instead of extracted text.
pub const EMBEDDED_IMAGE_NOTE: &str = "Resume content embedded as an attached image.";
