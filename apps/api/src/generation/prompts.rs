// All LLM prompt templates for the generation gateway.
// Placeholders are `{name}` tokens filled by `prompt_builder::render_template`;
// any other braces (the JSON examples) pass through untouched.

/// Shared closing instruction for every task.
pub const JSON_ONLY_INSTRUCTION: &str = "Return ONLY valid JSON. \
    Do NOT include explanations, apologies or markdown outside the JSON object.";

/// Resume generation. Region placeholders shape contact formats and style.
pub const RESUME_PROMPT_TEMPLATE: &str = r#"Generate a professional ATS-optimized resume in JSON format for a college student targeting the {market_name} job market.

Profile Data:
- Name: {full_name}
- Email: {email}
- Phone: {phone}
- LinkedIn: {linkedin}
- Headline: {headline}
- Summary: {summary}
- Experience: {experience}
- Education: {education}
- Skills: {skills}
- Projects: {projects}
- Target Role: {target_role}

Create a resume optimized for the {market_name} job market with:
- Action verbs and quantified achievements
- ATS-friendly keywords for the target role
- Contact details in local format (phone {phone_format}, location {location_format})
- Resume style: {resume_style}
- Skills relevant to employers such as {companies}
- Projects that show practical application

{json_only}
Use this exact structure:
{
  "contact": {
    "name": "Full Name",
    "email": "email@example.com",
    "phone": "{phone_format}",
    "linkedin": "https://linkedin.com/in/profile",
    "location": "{location_format}",
    "github": "https://github.com/username"
  },
  "summary": "2-3 sentence professional summary highlighting key skills and career goals for an entry-level position",
  "education": [
    {
      "institution": "University/College Name",
      "degree": "Bachelor of Technology",
      "field": "Computer Science Engineering",
      "duration": "2021 - 2025",
      "gpa": "8.5/10",
      "location": "{location_format}",
      "achievements": ["Dean's List", "Academic Excellence Award"]
    }
  ],
  "experience": [
    {
      "title": "Software Development Intern",
      "company": "Company Name",
      "duration": "Jun 2024 - Aug 2024",
      "location": "{location_format}",
      "type": "Internship",
      "achievements": [
        "Developed web application using React and Node.js, increasing user engagement by 25%",
        "Collaborated with team of 5 developers using Agile methodology",
        "Implemented RESTful APIs serving 1000+ daily requests"
      ]
    }
  ],
  "skills": {
    "technical": ["JavaScript", "React", "Node.js", "Python", "Git"],
    "soft": ["Problem Solving", "Team Collaboration", "Communication"]
  },
  "projects": [
    {
      "name": "E-commerce Web Application",
      "description": "Full-stack e-commerce platform with user authentication and payment integration",
      "technologies": ["React", "Node.js", "MongoDB"],
      "duration": "Mar 2024 - May 2024",
      "achievements": ["Built responsive frontend serving 500+ concurrent users"],
      "github": "https://github.com/username/ecommerce-app"
    }
  ],
  "certifications": ["AWS Certified Cloud Practitioner"],
  "achievements": ["Winner - College Hackathon 2024"]
}"#;

/// LinkedIn profile optimization.
pub const PROFILE_OPTIMIZATION_PROMPT_TEMPLATE: &str = r#"Analyze this LinkedIn profile for a college student and provide detailed optimization suggestions for the {market_name} job market.

Current Profile:
- Name: {full_name}
- Headline: {headline}
- Summary: {summary}
- Experience: {experience}
- Education: {education}
- Skills: {skills}
- Target Role: {target_role}
- Industry Focus: {industry}

Provide optimization suggestions focusing on:
- Keywords recruiters in the {market_name} market search for
- Industry-specific terminology
- Achievement quantification
- Professional networking with employers such as {companies}

{json_only}
Use this exact structure:
{
  "profileScore": 75,
  "headline": {
    "current": "current headline text",
    "improved": "Computer Science Student | React Developer | Seeking {target_role} Role",
    "reason": "Added specific skills and career intent"
  },
  "summary": {
    "issues": ["Too generic", "No quantified achievements", "Missing industry keywords"],
    "improved": "Passionate Computer Science student with hands-on experience in full-stack development. Built 5+ web applications using React and Node.js.",
    "tips": [
      "Add specific project numbers and metrics",
      "Mention collaboration and team skills"
    ]
  },
  "skills": {
    "missingSkills": ["System Design", "Data Structures", "Docker"],
    "skillsToHighlight": ["JavaScript", "React", "Problem Solving"],
    "industrySpecific": ["Microservices", "Cloud Computing"]
  },
  "quickWins": [
    "Add professional headshot photo",
    "Get 3+ recommendations from professors/colleagues",
    "Update headline with target role and key skills"
  ]
}"#;

/// Networking strategy suggestions.
pub const NETWORKING_PROMPT_TEMPLATE: &str = r#"Generate networking suggestions for a college student looking for {target_role} opportunities in the {market_name} job market.

Student Profile:
- Name: {full_name}
- Education: {education}
- Skills: {skills}
- Experience: {experience}
- Location: {location}
- Industry: {industry}

Provide a networking strategy including:
- Target companies and roles (for example {companies})
- Connection message templates
- Industry events and communities
- Professional development suggestions

{json_only}
Use this exact structure:
{
  "targetCompanies": [
    {
      "name": "Company Name",
      "role": "Software Development Engineer",
      "why": "Great for product experience and engineering culture",
      "keyPeople": ["Engineering Managers", "Senior Engineers", "Campus Recruiters"],
      "approach": "Highlight relevant projects and passion for the domain"
    }
  ],
  "connectionMessages": [
    {
      "type": "Alumni Connection",
      "template": "Hi [Name], I'm a final year CSE student at [University]. I noticed you're working as [Role] at [Company]. Would you be open to a brief conversation about your experience?",
      "personalization": "Mention specific projects or achievements from their profile"
    }
  ],
  "events": [
    {
      "name": "City Tech Meetup",
      "type": "In-person networking",
      "frequency": "Monthly",
      "benefit": "Meet local developers and startup founders"
    }
  ],
  "communities": ["Google Developer Groups", "[City] Developers Community"]
}"#;

/// Personalized LinkedIn connection request.
pub const CONNECTION_MESSAGE_PROMPT_TEMPLATE: &str = r#"Generate a personalized LinkedIn connection message for a college student in the {market_name} job market.

Student: {full_name} ({headline})
Target: {target_name} ({target_title} at {target_company})
Context: {context}

Requirements:
- Professional but friendly tone
- Mention a specific reason for connecting
- Keep under 300 characters (LinkedIn limit)
- Appropriate for the local professional culture
- Show genuine interest and value proposition

Generate 3 different message options.
{json_only}
Use this exact structure:
{
  "messages": [
    {
      "type": "Brief & Professional",
      "text": "Hi [Name], I'm a CSE student interested in [Company/Role]. Your work in [specific area] is inspiring. Would love to connect and learn from your experience!",
      "length": 150
    },
    {
      "type": "Project-based",
      "text": "Hello [Name], I recently built a [project type] similar to your work at [Company]. I'd appreciate connecting to learn from your expertise in [technology/domain].",
      "length": 180
    },
    {
      "type": "Career-focused",
      "text": "Hi [Name], As an aspiring [role] looking to start my career in [industry], I'd value connecting with experienced professionals like you at [Company].",
      "length": 160
    }
  ]
}"#;
