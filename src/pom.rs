use crate::error::{PomError, PomResult};

const POSITIONAL_TAGS: [&str; 3] = ["groupId", "artifactId", "version"];

pub const JAVA_MAIN: &str = r#"
public class App {
    public static void main(String[] args) throws Exception {
        System.out.println("Hello, world!");
    }
}
"#;

pub const JAVA_TEST: &str = r#"
import org.junit.*;

import static org.junit.Assert.assertEquals;

public class AppTest {
    @Test
    public void basic() throws Exception {
        assertEquals(1,1);
    }
}
"#;

pub const LOG4J: &str = "\
log4j.rootLogger=INFO, stdout
log4j.appender.stdout=org.apache.log4j.ConsoleAppender
log4j.appender.stdout.Target=System.out
log4j.appender.stdout.layout=org.apache.log4j.PatternLayout
log4j.appender.stdout.layout.ConversionPattern=%d{yy/MM/dd HH:mm:ss} %p %c{2}: %m%n
";

pub fn package_line(package_name: &str) -> String {
    format!("package {package_name};\n")
}

/// Renders one `groupId:artifactId:version[:key=value...]` descriptor.
///
/// Fields may be separated by `:` or `,`. Fewer than three fields is not an
/// error; the missing elements are simply absent from the output.
pub fn dependency_to_fragment(descriptor: &str) -> PomResult<String> {
    let mut xml = String::from("<dependency>\n");

    for (i, field) in descriptor.split([':', ',']).enumerate() {
        let (name, value) = match POSITIONAL_TAGS.get(i) {
            Some(tag) => (*tag, field),
            None => split_key_value(descriptor, field)?,
        };
        xml.push_str(&format!("  <{name}>{value}</{name}>\n"));
    }

    xml.push_str("</dependency>\n");
    Ok(xml)
}

fn split_key_value<'a>(descriptor: &str, field: &'a str) -> PomResult<(&'a str, &'a str)> {
    match field.split_once('=') {
        Some((key, value)) if !key.is_empty() && !value.contains('=') => Ok((key, value)),
        _ => Err(PomError::MalformedDependency {
            descriptor: descriptor.to_string(),
            field: field.to_string(),
        }),
    }
}

/// Prefixes every line of `text` with `prefix` after trimming trailing
/// whitespace, always ending with exactly one newline.
///
/// Indenting twice nests the prefixes, except for whitespace-only text:
/// that collapses to a bare `prefix` line, which the second pass trims
/// away again (`indent(indent("  ", "  "), "  ")` is `"  \n"`).
pub fn indent(text: &str, prefix: &str) -> String {
    let body = text.trim_end().replace('\n', &format!("\n{prefix}"));
    format!("{prefix}{body}\n")
}

pub fn wrap(tag: &str, inner: &str) -> String {
    format!("<{tag}>\n{}</{tag}>\n", indent(inner, "  "))
}

pub fn dependencies_to_fragment<S: AsRef<str>>(dependencies: &[S]) -> PomResult<String> {
    let mut xml = String::new();
    for dependency in dependencies {
        xml.push_str(&dependency_to_fragment(dependency.as_ref())?);
    }
    Ok(wrap("dependencies", &xml))
}

pub fn render_manifest<S: AsRef<str>>(
    group_id: &str,
    artifact_id: &str,
    version: &str,
    dependencies: &[S],
    jdk: &str,
) -> PomResult<String> {
    let deps_xml = indent(&dependencies_to_fragment(dependencies)?, "  ");

    Ok(format!(
        r#"<project xmlns="http://maven.apache.org/POM/4.0.0" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
  xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 http://maven.apache.org/xsd/maven-4.0.0.xsd">
  <modelVersion>4.0.0</modelVersion>

  <groupId>{group_id}</groupId>
  <artifactId>{artifact_id}</artifactId>
  <version>{version}</version>
  <packaging>jar</packaging>

  <name>{artifact_id}</name>
  <url>http://maven.apache.org</url>

  <properties>
    <project.build.sourceEncoding>UTF-8</project.build.sourceEncoding>
  </properties>

  <build>
    <plugins>
      <plugin>
        <groupId>org.apache.maven.plugins</groupId>
        <artifactId>maven-compiler-plugin</artifactId>
        <version>3.3</version>
        <configuration>
          <source>{jdk}</source>
          <target>{jdk}</target>
        </configuration>
      </plugin>
    </plugins>
  </build>

{deps_xml}
</project>
"#
    ))
}
