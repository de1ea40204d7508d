use serde::Serialize;

const TECHNOLOGY_ESSAY: &str = include_str!("../../../data/sample_essay_technology.txt");
const WORK_LIFE_ESSAY: &str = include_str!("../../../data/sample_essay_work_life.txt");

/// Practice prompt offered to students, optionally with a model essay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SamplePrompt {
    pub id: u32,
    pub title: &'static str,
    pub prompt: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_essay: Option<&'static str>,
}

const BUILTIN_PROMPTS: [SamplePrompt; 4] = [
    SamplePrompt {
        id: 1,
        title: "Technology and Education",
        prompt: "Some people believe that technology has made learning easier and more accessible, while others argue that it has made students lazy and less capable of deep thinking. Discuss both views and give your own opinion.",
        sample_essay: Some(TECHNOLOGY_ESSAY),
    },
    SamplePrompt {
        id: 2,
        title: "Work-Life Balance",
        prompt: "In many countries, people are working longer hours and have less time for family and leisure activities. What are the causes of this trend? What solutions can you suggest to improve work-life balance?",
        sample_essay: Some(WORK_LIFE_ESSAY),
    },
    SamplePrompt {
        id: 3,
        title: "Environmental Protection",
        prompt: "Some people think that environmental problems should be solved by the government, while others believe that individuals should take responsibility. Discuss both views and give your opinion.",
        sample_essay: None,
    },
    SamplePrompt {
        id: 4,
        title: "Social Media Impact",
        prompt: "Social media platforms have become an integral part of modern life. Do the advantages of social media outweigh the disadvantages? Give reasons for your answer and include relevant examples.",
        sample_essay: None,
    },
];

/// Static practice catalog.
#[derive(Debug, Clone, Copy)]
pub struct PromptCatalog {
    prompts: &'static [SamplePrompt],
}

impl Default for PromptCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PromptCatalog {
    pub fn builtin() -> Self {
        Self {
            prompts: &BUILTIN_PROMPTS,
        }
    }

    pub fn all(&self) -> &'static [SamplePrompt] {
        self.prompts
    }

    pub fn get(&self, id: u32) -> Option<&'static SamplePrompt> {
        self.prompts.iter().find(|prompt| prompt.id == id)
    }

    /// Prompt shown before the student picks one.
    pub fn default_prompt(&self) -> Option<&'static SamplePrompt> {
        self.prompts.first()
    }
}
