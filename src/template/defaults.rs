//! Default template contents, written to the user's templates directory the
//! first time a template file is missing.

use super::kind::TemplateKind;

pub const GPL_NOTICE: &str = "\
This program is free software; you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation; either version 2 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program; if not, write to the Free Software
Foundation, Inc., 51 Franklin Street, Fifth Floor, Boston,
MA 02110-1301, USA.
";

pub const BSD_NOTICE: &str = "\
Redistribution and use in source and binary forms, with or without
modification, are permitted provided that the following conditions are
met:

* Redistributions of source code must retain the above copyright
  notice, this list of conditions and the following disclaimer.
* Redistributions in binary form must reproduce the above
  copyright notice, this list of conditions and the following disclaimer
  in the documentation and/or other materials provided with the
  distribution.
* Neither the name of the {company} nor the names of its
  contributors may be used to endorse or promote products derived from
  this software without specific prior written permission.

THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS
\"AS IS\" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT
LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR
A PARTICULAR PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT
OWNER OR CONTRIBUTORS BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL,
SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT
LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE,
DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY
THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY, OR TORT
(INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
";

pub const FUNCTION_DESCRIPTION: &str = "
name: {functionname}
@param
@return
";

pub const FILE_HEADER: &str = "\
{filename}

Copyright {year} {developer} <{mail}>

{gpl}";

pub const CHANGELOG: &str = "\
{date}  {developer}  <{mail}>

 * \n\n\n";

/// Plain new files start empty.
pub const FILETYPE_NONE: &str = "";

/// Content written when the template file for `kind` is missing.
///
/// Filetype templates other than "None" have no default: their files are
/// optional and only read if the user created them.
pub fn default_content(kind: TemplateKind) -> Option<&'static str> {
    match kind {
        TemplateKind::FileHeader => Some(FILE_HEADER),
        TemplateKind::Gpl => Some(GPL_NOTICE),
        TemplateKind::Bsd => Some(BSD_NOTICE),
        TemplateKind::Function => Some(FUNCTION_DESCRIPTION),
        TemplateKind::Changelog => Some(CHANGELOG),
        TemplateKind::Filetype(id) if id.is_none() => Some(FILETYPE_NONE),
        TemplateKind::Filetype(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filetypes::FiletypeId;

    #[test]
    fn general_kinds_have_defaults() {
        for kind in TemplateKind::GENERAL {
            assert!(default_content(kind).is_some(), "{kind} has no default");
        }
    }

    #[test]
    fn only_none_filetype_has_a_default() {
        assert_eq!(default_content(TemplateKind::Filetype(FiletypeId::NONE)), Some(""));
        assert_eq!(default_content(TemplateKind::Filetype(FiletypeId(1))), None);
    }

    #[test]
    fn changelog_keeps_trailing_space_after_bullet() {
        assert!(CHANGELOG.contains("\n * \n"));
        assert!(CHANGELOG.ends_with("\n\n\n"));
    }

    #[test]
    fn function_description_starts_with_blank_line() {
        assert!(FUNCTION_DESCRIPTION.starts_with("\nname: {functionname}\n"));
    }
}
