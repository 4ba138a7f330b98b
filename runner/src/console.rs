// ═══════════════════════════════════════════════════════════════════════
// Console prompts. Every read returns Ok(None) at end of input, which the
// session treats as quitting.
// ═══════════════════════════════════════════════════════════════════════

use std::io::{self, BufRead, Write};

use warcad_engine::setup::{validate_territory_count, TerritoryInput, MIN_TERRITORIES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Attack,
    Quit,
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    /// Show `prompt` and read one line without its line ending.
    pub fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.say(prompt)?;
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        // Bytes that are not UTF-8 (a Latin-1 console) are replaced, not rejected.
        let mut line = String::from_utf8_lossy(&bytes).into_owned();
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Read an integer, repeating the prompt until one is entered.
    pub fn prompt_number(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            match line.trim().parse::<i64>() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => self.say("Invalid input. Please enter a whole number.\n")?,
            }
        }
    }

    fn prompt_text(&mut self, prompt: &str, what: &str) -> io::Result<Option<String>> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            if !line.trim().is_empty() {
                return Ok(Some(line));
            }
            self.say(&format!("The {what} cannot be empty.\n"))?;
        }
    }

    pub fn read_territory_count(&mut self) -> io::Result<Option<usize>> {
        let prompt = format!("Enter the total number of territories (minimum {MIN_TERRITORIES}): ");
        loop {
            let Some(n) = self.prompt_number(&prompt)? else {
                return Ok(None);
            };
            match validate_territory_count(n) {
                Ok(count) => return Ok(Some(count)),
                Err(_) => self.say(&format!(
                    "Invalid input. Please enter a whole number of at least {MIN_TERRITORIES}.\n"
                ))?,
            }
        }
    }

    /// Fill `inputs`, reserved beforehand, with `count` territories.
    pub fn read_territories(
        &mut self,
        count: usize,
        mut inputs: Vec<TerritoryInput>,
    ) -> io::Result<Option<Vec<TerritoryInput>>> {
        for number in 1..=count {
            self.say(&format!("--- Territory {number} ---\n"))?;
            let Some(name) = self.prompt_text("Territory name: ", "name")? else {
                return Ok(None);
            };
            let Some(color) = self.prompt_text("Army color: ", "color")? else {
                return Ok(None);
            };
            let troops = loop {
                let Some(n) = self.prompt_number("Number of troops: ")? else {
                    return Ok(None);
                };
                match i32::try_from(n) {
                    Ok(t) if t >= 0 => break t,
                    _ => self.say("Troop count must be zero or more.\n")?,
                }
            };
            self.say("\n")?;
            inputs.push(TerritoryInput { name, color, troops });
        }
        Ok(Some(inputs))
    }

    /// Turn menu: `1`/`attack` or `0`/`quit`.
    pub fn read_menu_choice(&mut self) -> io::Result<Option<MenuChoice>> {
        loop {
            self.say("\nAttack phase:\n1. Attack\n0. Quit game\n")?;
            let Some(line) = self.prompt_line("Choose an option: ")? else {
                return Ok(None);
            };
            match line.trim().to_ascii_lowercase().as_str() {
                "1" | "attack" => return Ok(Some(MenuChoice::Attack)),
                "0" | "quit" => return Ok(Some(MenuChoice::Quit)),
                _ => self.say("\nERROR: Invalid input. Please enter 1 or 0.\n")?,
            }
        }
    }

    /// Ask for attacker and defender numbers as shown on the map.
    pub fn read_attack(&mut self, count: usize) -> io::Result<Option<(i64, i64)>> {
        self.say("\n--- ATTACK SELECTION ---\n")?;
        let Some(from) = self.prompt_number(&format!("ATTACKING territory number (1 to {count}): "))? else {
            return Ok(None);
        };
        let Some(to) = self.prompt_number(&format!("DEFENDING territory number (1 to {count}): "))? else {
            return Ok(None);
        };
        Ok(Some((from, to)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn console_bytes(input: &[u8]) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.to_vec()), Vec::new())
    }

    fn output(c: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(c.into_output()).unwrap()
    }

    #[test]
    fn test_prompt_line_strips_crlf() {
        let mut c = console("Brasil\r\n");
        assert_eq!(c.prompt_line("> ").unwrap(), Some("Brasil".to_string()));
        assert_eq!(c.prompt_line("> ").unwrap(), None);
    }

    #[test]
    fn test_latin1_line_is_accepted() {
        let mut c = console_bytes(b"S\xE3o Paulo\nazul\n4\n");
        let slots = c.read_territories(1, Vec::new()).unwrap().unwrap();
        assert_eq!(slots[0].name, "S\u{FFFD}o Paulo");
        assert_eq!(slots[0].color, "azul");
        assert_eq!(slots[0].troops, 4);
    }

    #[test]
    fn test_number_reprompts() {
        let mut c = console("abc\n\n7\n");
        assert_eq!(c.prompt_number("n: ").unwrap(), Some(7));
        let out = output(c);
        assert_eq!(out.matches("Invalid input").count(), 2);
    }

    #[test]
    fn test_territory_count_minimum() {
        let mut c = console("3\nfive\n5\n");
        assert_eq!(c.read_territory_count().unwrap(), Some(5));
        assert_eq!(output(c).matches("at least 5").count(), 1);
    }

    #[test]
    fn test_read_territories() {
        let input = "Brasil\nvermelho\n5\n\nPeru\nazul\n-2\n3\n";
        let mut c = console(input);
        let slots = c.read_territories(2, Vec::new()).unwrap().unwrap();
        assert_eq!(slots[0], TerritoryInput::new("Brasil", "vermelho", 5));
        // Empty name re-prompted, negative troops re-prompted.
        assert_eq!(slots[1], TerritoryInput::new("Peru", "azul", 3));
        let out = output(c);
        assert!(out.contains("name cannot be empty"));
        assert!(out.contains("zero or more"));
    }

    #[test]
    fn test_read_territories_eof() {
        let mut c = console("Brasil\nvermelho\n");
        assert_eq!(c.read_territories(1, Vec::new()).unwrap(), None);
    }

    #[test]
    fn test_menu_choices() {
        let mut c = console("2\nATTACK\n0\n");
        assert_eq!(c.read_menu_choice().unwrap(), Some(MenuChoice::Attack));
        assert_eq!(c.read_menu_choice().unwrap(), Some(MenuChoice::Quit));
        assert_eq!(c.read_menu_choice().unwrap(), None);
    }

    #[test]
    fn test_read_attack() {
        let mut c = console("1\nx\n4\n");
        assert_eq!(c.read_attack(5).unwrap(), Some((1, 4)));
    }
}
