use crate::models::{Document, DocumentSet, ResumeAnalysis};

const ANALYST_ROLE: &str = "You are an expert ATS (Applicant Tracking System) resume analyst and career advisor. Your task is to help users tailor their resumes for specific job applications by analyzing their current resume against the job description and company information provided. You will then offer suggestions for improvement and provide a score out of 100 to indicate how well the resume matches the job requirements.";

const ANALYSIS_STEPS: &str = r#"Now, follow these steps to analyze the resume and provide tailored advice:

1. Analyze the resume in relation to the job description:
   - Identify key skills, experiences, and qualifications mentioned in the job description.
   - Compare these to the content of the resume.
   - Note any missing key elements or areas where the resume could be strengthened.

2. Consider the company culture and background:
   - Identify aspects of the company culture that might be relevant to highlight in the resume.
   - Look for ways the applicant's experience or skills align with the company's values or mission.

3. Provide specific suggestions for tailoring the resume:
   - Recommend additions, removals, or modifications to better match the job requirements.
   - Suggest ways to incorporate relevant keywords from the job description.
   - Advise on how to highlight experiences that align with the company culture.

4. Evaluate the overall strength of the resume:
   - Consider how well the resume matches the job requirements.
   - Assess the clarity, organization, and professionalism of the resume.
   - Take into account how well the resume reflects relevant aspects of the company culture.

5. Determine a score out of 100:
   - Base this score on how well the current resume matches the job and company requirements.
   - Consider both content and presentation in your scoring."#;

const ANALYSIS_FORMAT: &str = r#"Now, provide your analysis and recommendations in the following format:

<analysis>
[Provide a detailed analysis of the resume's strengths and weaknesses in relation to the job description and company culture.]
</analysis>

<tailoring_suggestions>
[List specific suggestions for improving the resume, including additions, removals, and modifications.]
</tailoring_suggestions>

<score_justification>
[Explain your reasoning for the score you're about to give, highlighting key factors that influenced your decision.]
</score_justification>

<score>
[Provide a score out of 100]
</score>

Remember to be constructive and specific in your feedback, providing actionable advice that will help the user improve their resume for this particular job application."#;

const OPTIMIZER_ROLE: &str = "You are an expert resume optimizer. Using the feedback and suggestions provided, optimize the following resume so it matches the target job as closely as possible without inventing experience the candidate does not have.";

const OPTIMIZATION_FORMAT: &str = r#"Provide your answer in the following format:

<optimized_resume>
[The complete optimized resume as plain text, ready to be saved to a file.]
</optimized_resume>

<changes_made>
[List each change you made and which suggestion it addresses.]
</changes_made>

<new_score>
[Provide a score out of 100 for the optimized resume against the same job]
</new_score>

<score_justification>
[Explain how the changes moved the score compared with the original resume.]
</score_justification>"#;

/// First exchange: score the resume against the job and company.
#[derive(Debug, Clone)]
pub struct AnalysisRequest<'a> {
    pub documents: &'a DocumentSet,
}

impl<'a> AnalysisRequest<'a> {
    pub fn new(documents: &'a DocumentSet) -> Self {
        Self { documents }
    }

    pub fn to_prompt(&self) -> String {
        let mut prompt = String::with_capacity(self.documents.total_chars() + 4096);
        prompt.push_str(ANALYST_ROLE);
        prompt.push_str("\n\nFirst, carefully review the following information:\n\n");

        push_section(
            &mut prompt,
            "1. The user's current resume:",
            &self.documents.resume,
        );
        push_section(
            &mut prompt,
            "2. The job description for the position they are applying for:",
            &self.documents.job_description,
        );
        push_section(
            &mut prompt,
            "3. Background information on the company, including details about company culture:",
            &self.documents.company_info,
        );

        prompt.push_str(ANALYSIS_STEPS);
        prompt.push_str("\n\n");
        prompt.push_str(ANALYSIS_FORMAT);
        prompt
    }

    pub fn estimate_tokens(&self) -> usize {
        estimate_tokens(&self.to_prompt())
    }
}

/// Second exchange: rewrite the resume from the first exchange's suggestions.
#[derive(Debug, Clone)]
pub struct OptimizationRequest<'a> {
    pub resume: &'a Document,
    pub analysis: &'a ResumeAnalysis,
}

impl<'a> OptimizationRequest<'a> {
    pub fn new(resume: &'a Document, analysis: &'a ResumeAnalysis) -> Self {
        Self { resume, analysis }
    }

    pub fn to_prompt(&self) -> String {
        let mut prompt = String::with_capacity(self.resume.content.len() + 4096);
        prompt.push_str(OPTIMIZER_ROLE);
        prompt.push_str("\n\n");

        prompt.push_str(&format!("Resume:\n<resume>\n{}\n</resume>\n\n", self.resume.content));
        prompt.push_str(&format!(
            "Suggestions:\n<tailoring_suggestions>\n{}\n</tailoring_suggestions>\n\n",
            self.analysis.tailoring_suggestions
        ));

        if !self.analysis.analysis.is_empty() {
            prompt.push_str(&format!(
                "Earlier analysis of this resume:\n<analysis>\n{}\n</analysis>\n\n",
                self.analysis.analysis
            ));
        }
        if !self.analysis.score.is_empty() {
            prompt.push_str(&format!(
                "The original resume scored {} out of 100.\n\n",
                self.analysis
                    .match_score
                    .map(|s| s.value().to_string())
                    .unwrap_or_else(|| self.analysis.score.clone())
            ));
        }

        prompt.push_str(OPTIMIZATION_FORMAT);
        prompt
    }

    pub fn estimate_tokens(&self) -> usize {
        estimate_tokens(&self.to_prompt())
    }
}

fn push_section(prompt: &mut String, heading: &str, document: &Document) {
    let tag = document.kind.tag();
    prompt.push_str(&format!(
        "{}\n<{}>\n{}\n</{}>\n\n",
        heading, tag, document.content, tag
    ));
}

/// Rough estimate: ~4 characters per token.
fn estimate_tokens(prompt: &str) -> usize {
    prompt.len() / 4
}
