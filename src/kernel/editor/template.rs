/// Boilerplate family chosen by a file's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    JavaScript,
    TypeScript,
    Tsx,
    Jsx,
    Html,
    Css,
    Json,
    Markdown,
    Python,
    Plain,
}

impl TemplateKind {
    /// The extension is whatever follows the last `.`, compared case-insensitively.
    /// Names without a `.` fall back to [`TemplateKind::Plain`].
    pub fn from_file_name(name: &str) -> Self {
        let Some((_, ext)) = name.rsplit_once('.') else {
            return Self::Plain;
        };
        match ext.to_ascii_lowercase().as_str() {
            "js" => Self::JavaScript,
            "ts" => Self::TypeScript,
            "tsx" => Self::Tsx,
            "jsx" => Self::Jsx,
            "html" => Self::Html,
            "css" => Self::Css,
            "json" => Self::Json,
            "md" => Self::Markdown,
            "py" => Self::Python,
            _ => Self::Plain,
        }
    }

    pub fn render(self, name: &str) -> String {
        match self {
            Self::JavaScript => format!("console.log('Hello from {name}');"),
            Self::TypeScript => format!(
                "const message: string = 'Hello from {name}';\nconsole.log(message);"
            ),
            Self::Tsx => format!(
                "import React from 'react';\n\nconst Component: React.FC = () => {{\n  return <div>Hello from {name}</div>;\n}};\n\nexport default Component;"
            ),
            Self::Jsx => format!(
                "import React from 'react';\n\nconst Component = () => {{\n  return <div>Hello from {name}</div>;\n}};\n\nexport default Component;"
            ),
            Self::Html => concat!(
                "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"UTF-8\">\n",
                "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
                "  <title>Document</title>\n</head>\n<body>\n  <h1>Hello World</h1>\n</body>\n</html>"
            )
            .to_string(),
            Self::Css => format!(
                "/* {name} */\n\nbody {{\n  font-family: -apple-system, BlinkMacSystemFont, sans-serif;\n  margin: 0;\n  padding: 20px;\n}}"
            ),
            Self::Json => format!(
                "{{\n  \"name\": \"{}\",\n  \"version\": \"1.0.0\",\n  \"description\": \"\"\n}}",
                name.replacen(".json", "", 1)
            ),
            Self::Markdown => format!(
                "# {}\n\nWelcome to your new markdown file!",
                name.replacen(".md", "", 1)
            ),
            Self::Python => format!(
                "#!/usr/bin/env python3\n\ndef main():\n    print(\"Hello from {name}\")\n\nif __name__ == \"__main__\":\n    main()"
            ),
            Self::Plain => format!("# Welcome to {name}\n\nStart coding here!"),
        }
    }
}

/// Initial buffer for a file opened for the first time.
pub fn default_content(name: &str) -> String {
    TemplateKind::from_file_name(name).render(name)
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/template.rs"]
mod tests;
