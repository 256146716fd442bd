use crate::models::AnalysisKind;

pub struct PromptTemplate;

impl PromptTemplate {
    /// Build the user prompt for one analysis kind. Every template pins the
    /// exact JSON object shape the response parser expects; downstream
    /// rendering depends on field presence, so the key set is not negotiable.
    pub fn build_analysis_prompt(kind: AnalysisKind, code: &str) -> String {
        match kind {
            AnalysisKind::Summary => Self::build_summary_prompt(code),
            AnalysisKind::Explanation => Self::build_explanation_prompt(code),
            AnalysisKind::Complexity => Self::build_complexity_prompt(code),
            AnalysisKind::Alternatives => Self::build_alternatives_prompt(code),
            AnalysisKind::PracticeProblems => Self::build_practice_problems_prompt(code),
            AnalysisKind::Topics => Self::build_topics_prompt(code),
        }
    }

    pub fn build_system_prompt(kind: AnalysisKind) -> String {
        let role = match kind {
            AnalysisKind::Summary => "You are an AI expert at summarizing code functionality.",
            AnalysisKind::Explanation => {
                "You are an expert software developer explaining code to a learner."
            }
            AnalysisKind::Complexity => {
                "You are an expert software engineer specializing in code analysis."
            }
            AnalysisKind::Alternatives => {
                "You are an expert computer scientist skilled at suggesting alternative \
                 approaches to solve coding problems."
            }
            AnalysisKind::PracticeProblems | AnalysisKind::Topics => {
                "You are an expert computer science educator."
            }
        };

        format!(
            "{}\n\nRespond with a single JSON object and nothing else - no markdown fences, \
             no commentary outside the JSON.",
            role
        )
    }

    pub fn build_summary_prompt(code: &str) -> String {
        format!(
            r#"CODE SUMMARY

Provide a concise summary of what the following code does.

CODE:
```
{}
```

OUTPUT FORMAT:
Respond with a JSON object with exactly this key:
- "summary": a concise summary of the code functionality."#,
            code
        )
    }

    pub fn build_explanation_prompt(code: &str) -> String {
        format!(
            r#"LINE-BY-LINE EXPLANATION

Provide a detailed, chunk-by-chunk explanation of the following code. Break the
code into logical segments, and for each segment give the line numbers, the
code itself, and a clear explanation.

CODE:
```
{}
```

OUTPUT FORMAT:
Respond with a JSON object with exactly this key:
- "explanation": an array of objects, each with:
  - "lines": the line number(s) this segment covers (e.g. "1-3", "5")
  - "code": the corresponding snippet of code being explained
  - "explanation": the detailed explanation for this segment"#,
            code
        )
    }

    pub fn build_complexity_prompt(code: &str) -> String {
        format!(
            r#"COMPLEXITY ANALYSIS

Analyze the given code and determine its time and space complexity. Justify
the analysis based on loop structures, recursions, and data structure sizes.

CODE:
```
{}
```

OUTPUT FORMAT:
Respond with a JSON object with exactly these keys:
- "timeComplexity": the time complexity of the code (e.g. "O(n log n)")
- "spaceComplexity": the space complexity of the code
- "justification": the reasoning behind both, referencing the relevant loops,
  recursions, and data structures"#,
            code
        )
    }

    pub fn build_alternatives_prompt(code: &str) -> String {
        format!(
            r#"ALTERNATIVE APPROACHES

Given the following code, first detect the programming language. Then suggest
alternative approaches that solve the same problem. Include brute-force,
better, and optimal approaches where applicable. Code snippets must use the
same language as the original code.

CODE:
```
{}
```

OUTPUT FORMAT:
Respond with a JSON object with exactly this key:
- "alternatives": an array of objects, each with:
  - "approach": the name of the approach (e.g. "Brute Force", "Optimal")
  - "codeSnippet": the code for the alternative approach
  - "explanation": a detailed explanation of the approach
  - "pros": the advantages of this approach
  - "cons": the disadvantages of this approach
  - "timeComplexity": the time complexity of this approach
  - "spaceComplexity": the space complexity of this approach"#,
            code
        )
    }

    pub fn build_practice_problems_prompt(code: &str) -> String {
        format!(
            r#"PRACTICE PROBLEMS

Given the following code, suggest 3 relevant practice problems with links to
LeetCode or GeeksforGeeks.

CODE:
```
{}
```

OUTPUT FORMAT:
Respond with a JSON object with exactly this key:
- "problems": an array of objects, each with:
  - "title": the problem title
  - "link": a URL to the problem"#,
            code
        )
    }

    pub fn build_topics_prompt(code: &str) -> String {
        format!(
            r#"TOPIC IDENTIFICATION

Identify the core computer science or programming topics covered in the
following code.

CODE:
```
{}
```

OUTPUT FORMAT:
Respond with a JSON object with exactly this key:
- "topics": an array of short topic labels (e.g. "Dynamic Programming",
  "Hash Tables")"#,
            code
        )
    }

    /// Follow-up prompt. Only the original code and the single latest
    /// question are supplied; prior exchanges are not replayed.
    pub fn build_follow_up_prompt(code: &str, question: &str) -> String {
        format!(
            r#"FOLLOW-UP QUESTION

A user has a follow-up question about the following code snippet. Provide a
clear, concise, and helpful answer. Format your answer using Markdown.

CODE:
```
{}
```

USER'S QUESTION:
"{}""#,
            code, question
        )
    }

    pub fn build_follow_up_system_prompt() -> String {
        "You are an expert software engineer acting as a coding mentor. Answer the \
         user's question about the given code directly, in plain prose."
            .to_string()
    }
}
