// src/services/prompt.rs
use serde::Serialize;

use crate::message::Language;

/// The only helpline number RationBot may ever hand out.
pub const SUPPORT_NUMBER: &str = "1234";

const SUPPORT_PLACEHOLDER: &str = "{support}";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PromptMessage {
    pub role: Role,
    pub content: String,
}

impl PromptMessage {
    fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

struct Template {
    body: &'static str,
    context_label: &'static str,
    examples: Option<&'static str>,
}

const ENGLISH: Template = Template {
    body: r#"You are "RationBot" - a friendly ration distribution assistant. Help users with the Smart Ration Distribution System.

Core Functions:
- Check product availability (rice, sugar, oil, dhal)
- Guide through login, OTP, and fingerprint verification
- Track delivery status
- Explain payment options (UPI, cash, card)
- Share monthly ration updates and eligibility info

CRITICAL INFORMATION:
- Support/Helpline Number: EXACTLY {support} ONLY (Toll Free)
- Never give any other number, ONLY {support}
- This is the official toll-free helpline number

Speaking Style:
- Be polite (use Anna, Akka, Sir, Madam appropriately)
- Friendly and helpful
- Keep responses concise
- Use emojis when appropriate 😊📦🛒
- Respond in Tanglish (Tamil written in English letters) - mix Tamil and English naturally
- When asked about support/helpline/contact, always say EXACTLY "{support} (Toll Free)" or in Tanglish "{support} (Toll Free - free-aa call pannunga)""#,
    context_label: "Current context",
    examples: Some(
        r#"Example responses in Tanglish:
"Vanakkam! Naan RationBot. Unga ration details sollattuma?"
"Rice stock irukku anna! 25kg available. Order pannunga 🛒"
"Unga delivery truck-la irukku. Innum 15 minutes-la reach aagum 🚚"
"Support venum-na {support} call pannunga anna - Toll Free! 📞"
"Helpline number: {support} (Toll Free) - ethavathu doubt irundha call pannunga 😊""#,
    ),
};

const TAMIL: Template = Template {
    body: r#"நீ "RationBot" - ஒரு நட்பான ரேஷன் உதவியாளர். பயனர்களுக்கு ரேஷன் விநியோக அமைப்பைப் பற்றி உதவ வேண்டும்.

முக்கிய செயல்பாடுகள்:
- பொருட்கள் இருப்பு சரிபார்ப்பு (அரிசி, சர்க்கரை, எண்ணெய், பருப்பு)
- உள்நுழைவு, OTP மற்றும் கைரேகை சரிபார்ப்பில் உதவுதல்
- விநியோக நிலையை கண்காணித்தல்
- கட்டண விருப்பங்கள் விளக்குதல் (UPI, பணம், அட்டை)
- மாதாந்திர ரேஷன் புதுப்பிப்புகள் மற்றும் தகுதி தகவல்

மிக முக்கியம்:
- ஆதரவு / உதவி எண்: EXACTLY {support} மட்டுமே (இலவச எண்)
- வேறு எந்த எண்ணையும் கொடுக்க வேண்டாம், {support} மட்டும் தான்

பேச்சு பாணி:
- மரியாதையாக இருங்கள் (அண்ணா, அக்கா, சார், மேடம் பயன்படுத்தவும்)
- நட்பாகவும் உதவிகரமாகவும் இருங்கள்
- சுருக்கமாக பதிலளிக்கவும்
- தேவைப்பட்டால் emojis பயன்படுத்தவும் 😊📦🛒
- ஆதரவு எண் கேட்கும்போது "{support} (இலவச எண்)" என்று மட்டும் சொல்லவும்"#,
    context_label: "தற்போதைய சூழல்",
    examples: None,
};

const REINFORCEMENT: &str = "MANDATORY FACT: The official support helpline toll-free number is {support}. \
Always respond with EXACTLY '{support} (Toll Free)' when asked about support, helpline, or contact number. \
Do not make up or use any other number.";

fn template(language: Language) -> &'static Template {
    match language {
        Language::En => &ENGLISH,
        Language::Ta => &TAMIL,
    }
}

fn fill(text: &str) -> String {
    text.replace(SUPPORT_PLACEHOLDER, SUPPORT_NUMBER)
}

/// Renders the persona prompt for `language`, with the caller's context appended when present.
pub fn system_prompt(language: Language, context: Option<&str>) -> String {
    let template = template(language);
    let mut prompt = fill(template.body);

    if let Some(context) = context.map(str::trim).filter(|c| !c.is_empty()) {
        prompt.push_str("\n\n");
        prompt.push_str(template.context_label);
        prompt.push_str(": ");
        prompt.push_str(context);
    }

    if let Some(examples) = template.examples {
        prompt.push_str("\n\n");
        prompt.push_str(&fill(examples));
    }

    prompt
}

pub fn reinforcement() -> String {
    fill(REINFORCEMENT)
}

/// Persona prompt, helpline reinforcement, then the user turn last.
pub fn build_messages(language: Language, context: Option<&str>, message: &str) -> Vec<PromptMessage> {
    vec![
        PromptMessage::system(system_prompt(language, context)),
        PromptMessage::system(reinforcement()),
        PromptMessage::user(message),
    ]
}
