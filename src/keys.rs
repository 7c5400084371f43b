// SPDX-License-Identifier: PMPL-1.0-or-later

//! Stable message keys.
//!
//! Keys are never translated. `ER_*` keys name error conditions, `WG_*` keys
//! name warnings, and the remaining keys are UI strings that share the same
//! tables and lookup path.

// Errors

pub const ER_CURRENT_NOT_ALLOWED_IN_MATCH: &str = "ER_CURRENT_NOT_ALLOWED_IN_MATCH";
pub const ER_CURRENT_TAKES_NO_ARGS: &str = "ER_CURRENT_TAKES_NO_ARGS";
pub const ER_DOCUMENT_REPLACED: &str = "ER_DOCUMENT_REPLACED";
pub const ER_CONTEXT_HAS_NO_OWNERDOC: &str = "ER_CONTEXT_HAS_NO_OWNERDOC";
pub const ER_LOCALNAME_HAS_TOO_MANY_ARGS: &str = "ER_LOCALNAME_HAS_TOO_MANY_ARGS";
pub const ER_NAMESPACEURI_HAS_TOO_MANY_ARGS: &str = "ER_NAMESPACEURI_HAS_TOO_MANY_ARGS";
pub const ER_NORMALIZESPACE_HAS_TOO_MANY_ARGS: &str = "ER_NORMALIZESPACE_HAS_TOO_MANY_ARGS";
pub const ER_NUMBER_HAS_TOO_MANY_ARGS: &str = "ER_NUMBER_HAS_TOO_MANY_ARGS";
pub const ER_NAME_HAS_TOO_MANY_ARGS: &str = "ER_NAME_HAS_TOO_MANY_ARGS";
pub const ER_STRING_HAS_TOO_MANY_ARGS: &str = "ER_STRING_HAS_TOO_MANY_ARGS";
pub const ER_STRINGLENGTH_HAS_TOO_MANY_ARGS: &str = "ER_STRINGLENGTH_HAS_TOO_MANY_ARGS";
pub const ER_TRANSLATE_TAKES_3_ARGS: &str = "ER_TRANSLATE_TAKES_3_ARGS";
pub const ER_UNPARSEDENTITYURI_TAKES_1_ARG: &str = "ER_UNPARSEDENTITYURI_TAKES_1_ARG";
pub const ER_NAMESPACEAXIS_NOT_IMPLEMENTED: &str = "ER_NAMESPACEAXIS_NOT_IMPLEMENTED";
pub const ER_UNKNOWN_AXIS: &str = "ER_UNKNOWN_AXIS";
pub const ER_UNKNOWN_MATCH_OPERATION: &str = "ER_UNKNOWN_MATCH_OPERATION";
pub const ER_INCORRECT_ARG_LENGTH: &str = "ER_INCORRECT_ARG_LENGTH";
pub const ER_CANT_CONVERT_TO_NUMBER: &str = "ER_CANT_CONVERT_TO_NUMBER";
pub const ER_CANT_CONVERT_TO_NODELIST: &str = "ER_CANT_CONVERT_TO_NODELIST";
pub const ER_CANT_CONVERT_TO_MUTABLENODELIST: &str = "ER_CANT_CONVERT_TO_MUTABLENODELIST";
pub const ER_CANT_CONVERT_TO_TYPE: &str = "ER_CANT_CONVERT_TO_TYPE";
pub const ER_EXPECTED_MATCH_PATTERN: &str = "ER_EXPECTED_MATCH_PATTERN";
pub const ER_COULDNOT_GET_VAR_NAMED: &str = "ER_COULDNOT_GET_VAR_NAMED";
pub const ER_UNKNOWN_OPCODE: &str = "ER_UNKNOWN_OPCODE";
pub const ER_EXTRA_ILLEGAL_TOKENS: &str = "ER_EXTRA_ILLEGAL_TOKENS";
pub const ER_EXPECTED_DOUBLE_QUOTE: &str = "ER_EXPECTED_DOUBLE_QUOTE";
pub const ER_EXPECTED_SINGLE_QUOTE: &str = "ER_EXPECTED_SINGLE_QUOTE";
pub const ER_EMPTY_EXPRESSION: &str = "ER_EMPTY_EXPRESSION";
pub const ER_EXPECTED_BUT_FOUND: &str = "ER_EXPECTED_BUT_FOUND";
pub const ER_INCORRECT_PROGRAMMER_ASSERTION: &str = "ER_INCORRECT_PROGRAMMER_ASSERTION";
pub const ER_BOOLEAN_ARG_NO_LONGER_OPTIONAL: &str = "ER_BOOLEAN_ARG_NO_LONGER_OPTIONAL";
pub const ER_FOUND_COMMA_BUT_NO_PRECEDING_ARG: &str = "ER_FOUND_COMMA_BUT_NO_PRECEDING_ARG";
pub const ER_FOUND_COMMA_BUT_NO_FOLLOWING_ARG: &str = "ER_FOUND_COMMA_BUT_NO_FOLLOWING_ARG";
pub const ER_PREDICATE_ILLEGAL_SYNTAX: &str = "ER_PREDICATE_ILLEGAL_SYNTAX";
pub const ER_ILLEGAL_AXIS_NAME: &str = "ER_ILLEGAL_AXIS_NAME";
pub const ER_UNKNOWN_NODETYPE: &str = "ER_UNKNOWN_NODETYPE";
pub const ER_PATTERN_LITERAL_NEEDS_BE_QUOTED: &str = "ER_PATTERN_LITERAL_NEEDS_BE_QUOTED";
pub const ER_COULDNOT_BE_FORMATTED_TO_NUMBER: &str = "ER_COULDNOT_BE_FORMATTED_TO_NUMBER";
pub const ER_COULDNOT_CREATE_XMLPROCESSORLIAISON: &str = "ER_COULDNOT_CREATE_XMLPROCESSORLIAISON";
pub const ER_DIDNOT_FIND_XPATH_SELECT_EXP: &str = "ER_DIDNOT_FIND_XPATH_SELECT_EXP";
pub const ER_COULDNOT_FIND_ENDOP_AFTER_OPLOCATIONPATH: &str = "ER_COULDNOT_FIND_ENDOP_AFTER_OPLOCATIONPATH";
pub const ER_ERROR_OCCURED: &str = "ER_ERROR_OCCURED";
pub const ER_ILLEGAL_VARIABLE_REFERENCE: &str = "ER_ILLEGAL_VARIABLE_REFERENCE";
pub const ER_AXES_NOT_ALLOWED: &str = "ER_AXES_NOT_ALLOWED";
pub const ER_KEY_HAS_TOO_MANY_ARGS: &str = "ER_KEY_HAS_TOO_MANY_ARGS";
pub const ER_COUNT_TAKES_1_ARG: &str = "ER_COUNT_TAKES_1_ARG";
pub const ER_COULDNOT_FIND_FUNCTION: &str = "ER_COULDNOT_FIND_FUNCTION";
pub const ER_UNSUPPORTED_ENCODING: &str = "ER_UNSUPPORTED_ENCODING";
pub const ER_PROBLEM_IN_DTM_NEXTSIBLING: &str = "ER_PROBLEM_IN_DTM_NEXTSIBLING";
pub const ER_CANNOT_WRITE_TO_EMPTYNODELISTIMPL: &str = "ER_CANNOT_WRITE_TO_EMPTYNODELISTIMPL";
pub const ER_SETDOMFACTORY_NOT_SUPPORTED: &str = "ER_SETDOMFACTORY_NOT_SUPPORTED";
pub const ER_PREFIX_MUST_RESOLVE: &str = "ER_PREFIX_MUST_RESOLVE";
pub const ER_PARSE_NOT_SUPPORTED: &str = "ER_PARSE_NOT_SUPPORTED";
pub const ER_SAX_API_NOT_HANDLED: &str = "ER_SAX_API_NOT_HANDLED";
pub const ER_IGNORABLE_WHITESPACE_NOT_HANDLED: &str = "ER_IGNORABLE_WHITESPACE_NOT_HANDLED";
pub const ER_DTM_CANNOT_HANDLE_NODES: &str = "ER_DTM_CANNOT_HANDLE_NODES";
pub const ER_XERCES_CANNOT_HANDLE_NODES: &str = "ER_XERCES_CANNOT_HANDLE_NODES";
pub const ER_XERCES_PARSE_ERROR_DETAILS: &str = "ER_XERCES_PARSE_ERROR_DETAILS";
pub const ER_XERCES_PARSE_ERROR: &str = "ER_XERCES_PARSE_ERROR";
pub const ER_INVALID_UTF16_SURROGATE: &str = "ER_INVALID_UTF16_SURROGATE";
pub const ER_OIERROR: &str = "ER_OIERROR";
pub const ER_CANNOT_CREATE_URL: &str = "ER_CANNOT_CREATE_URL";
pub const ER_XPATH_READOBJECT: &str = "ER_XPATH_READOBJECT";
pub const ER_FUNCTION_TOKEN_NOT_FOUND: &str = "ER_FUNCTION_TOKEN_NOT_FOUND";
pub const ER_CANNOT_DEAL_XPATH_TYPE: &str = "ER_CANNOT_DEAL_XPATH_TYPE";
pub const ER_NODESET_NOT_MUTABLE: &str = "ER_NODESET_NOT_MUTABLE";
pub const ER_NODESETDTM_NOT_MUTABLE: &str = "ER_NODESETDTM_NOT_MUTABLE";
pub const ER_VAR_NOT_RESOLVABLE: &str = "ER_VAR_NOT_RESOLVABLE";
pub const ER_NULL_ERROR_HANDLER: &str = "ER_NULL_ERROR_HANDLER";
pub const ER_PROG_ASSERT_UNKNOWN_OPCODE: &str = "ER_PROG_ASSERT_UNKNOWN_OPCODE";
pub const ER_ZERO_OR_ONE: &str = "ER_ZERO_OR_ONE";
pub const ER_RTF_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER: &str = "ER_RTF_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER";
pub const ER_ASNODEITERATOR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER: &str = "ER_ASNODEITERATOR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER";
pub const ER_DETACH_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER: &str = "ER_DETACH_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER";
pub const ER_NUM_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER: &str = "ER_NUM_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER";
pub const ER_XSTR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER: &str = "ER_XSTR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER";
pub const ER_STR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER: &str = "ER_STR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER";
pub const ER_FSB_NOT_SUPPORTED_XSTRINGFORCHARS: &str = "ER_FSB_NOT_SUPPORTED_XSTRINGFORCHARS";
pub const ER_COULD_NOT_FIND_VAR: &str = "ER_COULD_NOT_FIND_VAR";
pub const ER_XSTRINGFORCHARS_CANNOT_TAKE_STRING: &str = "ER_XSTRINGFORCHARS_CANNOT_TAKE_STRING";
pub const ER_FASTSTRINGBUFFER_CANNOT_BE_NULL: &str = "ER_FASTSTRINGBUFFER_CANNOT_BE_NULL";
pub const ER_TWO_OR_THREE: &str = "ER_TWO_OR_THREE";
pub const ER_VARIABLE_ACCESSED_BEFORE_BIND: &str = "ER_VARIABLE_ACCESSED_BEFORE_BIND";
pub const ER_FSB_CANNOT_TAKE_STRING: &str = "ER_FSB_CANNOT_TAKE_STRING";
pub const ER_SETTING_WALKER_ROOT_TO_NULL: &str = "ER_SETTING_WALKER_ROOT_TO_NULL";
pub const ER_NODESETDTM_CANNOT_ITERATE: &str = "ER_NODESETDTM_CANNOT_ITERATE";
pub const ER_NODESET_CANNOT_ITERATE: &str = "ER_NODESET_CANNOT_ITERATE";
pub const ER_NODESETDTM_CANNOT_INDEX: &str = "ER_NODESETDTM_CANNOT_INDEX";
pub const ER_NODESET_CANNOT_INDEX: &str = "ER_NODESET_CANNOT_INDEX";
pub const ER_CANNOT_CALL_SETSHOULDCACHENODE: &str = "ER_CANNOT_CALL_SETSHOULDCACHENODE";
pub const ER_ONLY_ALLOWS: &str = "ER_ONLY_ALLOWS";
pub const ER_UNKNOWN_STEP: &str = "ER_UNKNOWN_STEP";
pub const ER_EXPECTED_REL_LOC_PATH: &str = "ER_EXPECTED_REL_LOC_PATH";
pub const ER_EXPECTED_LOC_PATH: &str = "ER_EXPECTED_LOC_PATH";
pub const ER_EXPECTED_LOC_STEP: &str = "ER_EXPECTED_LOC_STEP";
pub const ER_EXPECTED_NODE_TEST: &str = "ER_EXPECTED_NODE_TEST";
pub const ER_EXPECTED_STEP_PATTERN: &str = "ER_EXPECTED_STEP_PATTERN";
pub const ER_EXPECTED_REL_PATH_PATTERN: &str = "ER_EXPECTED_REL_PATH_PATTERN";
pub const ER_CANT_CONVERT_TO_BOOLEAN: &str = "ER_CANT_CONVERT_TO_BOOLEAN";
pub const ER_CANT_CONVERT_TO_SINGLENODE: &str = "ER_CANT_CONVERT_TO_SINGLENODE";
pub const ER_CANT_GET_SNAPSHOT_LENGTH: &str = "ER_CANT_GET_SNAPSHOT_LENGTH";
pub const ER_NON_ITERATOR_TYPE: &str = "ER_NON_ITERATOR_TYPE";
pub const ER_DOC_MUTATED: &str = "ER_DOC_MUTATED";
pub const ER_INVALID_XPATH_TYPE: &str = "ER_INVALID_XPATH_TYPE";
pub const ER_EMPTY_XPATH_RESULT: &str = "ER_EMPTY_XPATH_RESULT";
pub const ER_INCOMPATIBLE_TYPES: &str = "ER_INCOMPATIBLE_TYPES";
pub const ER_NULL_RESOLVER: &str = "ER_NULL_RESOLVER";
pub const ER_CANT_CONVERT_TO_STRING: &str = "ER_CANT_CONVERT_TO_STRING";
pub const ER_NON_SNAPSHOT_TYPE: &str = "ER_NON_SNAPSHOT_TYPE";
pub const ER_WRONG_DOCUMENT: &str = "ER_WRONG_DOCUMENT";
pub const ER_WRONG_NODETYPE: &str = "ER_WRONG_NODETYPE";
pub const ER_XPATH_ERROR: &str = "ER_XPATH_ERROR";
pub const ER_CANT_CONVERT_XPATHRESULTTYPE_TO_NUMBER: &str = "ER_CANT_CONVERT_XPATHRESULTTYPE_TO_NUMBER";
pub const ER_EXTENSION_FUNCTION_CANNOT_BE_INVOKED: &str = "ER_EXTENSION_FUNCTION_CANNOT_BE_INVOKED";
pub const ER_RESOLVE_VARIABLE_RETURNS_NULL: &str = "ER_RESOLVE_VARIABLE_RETURNS_NULL";
pub const ER_UNSUPPORTED_RETURN_TYPE: &str = "ER_UNSUPPORTED_RETURN_TYPE";
pub const ER_SOURCE_RETURN_TYPE_CANNOT_BE_NULL: &str = "ER_SOURCE_RETURN_TYPE_CANNOT_BE_NULL";
pub const ER_ARG_CANNOT_BE_NULL: &str = "ER_ARG_CANNOT_BE_NULL";
pub const ER_OBJECT_MODEL_NULL: &str = "ER_OBJECT_MODEL_NULL";
pub const ER_OBJECT_MODEL_EMPTY: &str = "ER_OBJECT_MODEL_EMPTY";
pub const ER_FEATURE_NAME_NULL: &str = "ER_FEATURE_NAME_NULL";
pub const ER_FEATURE_UNKNOWN: &str = "ER_FEATURE_UNKNOWN";
pub const ER_GETTING_NULL_FEATURE: &str = "ER_GETTING_NULL_FEATURE";
pub const ER_GETTING_UNKNOWN_FEATURE: &str = "ER_GETTING_UNKNOWN_FEATURE";
pub const ER_NULL_XPATH_FUNCTION_RESOLVER: &str = "ER_NULL_XPATH_FUNCTION_RESOLVER";
pub const ER_NULL_XPATH_VARIABLE_RESOLVER: &str = "ER_NULL_XPATH_VARIABLE_RESOLVER";

// Warnings

pub const WG_LOCALE_NAME_NOT_HANDLED: &str = "WG_LOCALE_NAME_NOT_HANDLED";
pub const WG_PROPERTY_NOT_SUPPORTED: &str = "WG_PROPERTY_NOT_SUPPORTED";
pub const WG_DONT_DO_ANYTHING_WITH_NS: &str = "WG_DONT_DO_ANYTHING_WITH_NS";
pub const WG_SECURITY_EXCEPTION: &str = "WG_SECURITY_EXCEPTION";
pub const WG_QUO_NO_LONGER_DEFINED: &str = "WG_QUO_NO_LONGER_DEFINED";
pub const WG_NEED_DERIVED_OBJECT_TO_IMPLEMENT_NODETEST: &str = "WG_NEED_DERIVED_OBJECT_TO_IMPLEMENT_NODETEST";
pub const WG_FUNCTION_TOKEN_NOT_FOUND: &str = "WG_FUNCTION_TOKEN_NOT_FOUND";
pub const WG_COULDNOT_FIND_FUNCTION: &str = "WG_COULDNOT_FIND_FUNCTION";
pub const WG_CANNOT_MAKE_URL_FROM: &str = "WG_CANNOT_MAKE_URL_FROM";
pub const WG_EXPAND_ENTITIES_NOT_SUPPORTED: &str = "WG_EXPAND_ENTITIES_NOT_SUPPORTED";
pub const WG_ILLEGAL_VARIABLE_REFERENCE: &str = "WG_ILLEGAL_VARIABLE_REFERENCE";
pub const WG_UNSUPPORTED_ENCODING: &str = "WG_UNSUPPORTED_ENCODING";

// UI strings

pub const UI_LANGUAGE: &str = "ui_language";
pub const HELP_LANGUAGE: &str = "help_language";
pub const LANGUAGE: &str = "language";
pub const BAD_CODE: &str = "BAD_CODE";
pub const FORMAT_FAILED: &str = "FORMAT_FAILED";
pub const VERSION: &str = "version";
pub const VERSION2: &str = "version2";
pub const YES: &str = "yes";
pub const LINE: &str = "line";
pub const COLUMN: &str = "column";
pub const XSLDONE: &str = "xsldone";
pub const XPATH_OPTION: &str = "xpath_option";
pub const OPTION_IN: &str = "optionIN";
pub const OPTION_SELECT: &str = "optionSelect";
pub const OPTION_MATCH: &str = "optionMatch";
pub const OPTION_ANY_EXPR: &str = "optionAnyExpr";
pub const NO_PARSER_MSG1: &str = "noParsermsg1";
pub const NO_PARSER_MSG2: &str = "noParsermsg2";
pub const NO_PARSER_MSG3: &str = "noParsermsg3";
pub const NO_PARSER_MSG4: &str = "noParsermsg4";
pub const NO_PARSER_MSG5: &str = "noParsermsg5";
pub const GTONE: &str = "gtone";
pub const ZERO: &str = "zero";
pub const ONE: &str = "one";
pub const TWO: &str = "two";
pub const THREE: &str = "three";
pub const ERROR_HEADER: &str = "ERROR_HEADER";
pub const WARNING_HEADER: &str = "WARNING_HEADER";
pub const XSL_HEADER: &str = "XSL_HEADER";
pub const XML_HEADER: &str = "XML_HEADER";
pub const QUERY_HEADER: &str = "QUERY_HEADER";

/// Every error key, in table order.
pub const ERROR_KEYS: &[&str] = &[
    ER_CURRENT_NOT_ALLOWED_IN_MATCH,
    ER_CURRENT_TAKES_NO_ARGS,
    ER_DOCUMENT_REPLACED,
    ER_CONTEXT_HAS_NO_OWNERDOC,
    ER_LOCALNAME_HAS_TOO_MANY_ARGS,
    ER_NAMESPACEURI_HAS_TOO_MANY_ARGS,
    ER_NORMALIZESPACE_HAS_TOO_MANY_ARGS,
    ER_NUMBER_HAS_TOO_MANY_ARGS,
    ER_NAME_HAS_TOO_MANY_ARGS,
    ER_STRING_HAS_TOO_MANY_ARGS,
    ER_STRINGLENGTH_HAS_TOO_MANY_ARGS,
    ER_TRANSLATE_TAKES_3_ARGS,
    ER_UNPARSEDENTITYURI_TAKES_1_ARG,
    ER_NAMESPACEAXIS_NOT_IMPLEMENTED,
    ER_UNKNOWN_AXIS,
    ER_UNKNOWN_MATCH_OPERATION,
    ER_INCORRECT_ARG_LENGTH,
    ER_CANT_CONVERT_TO_NUMBER,
    ER_CANT_CONVERT_TO_NODELIST,
    ER_CANT_CONVERT_TO_MUTABLENODELIST,
    ER_CANT_CONVERT_TO_TYPE,
    ER_EXPECTED_MATCH_PATTERN,
    ER_COULDNOT_GET_VAR_NAMED,
    ER_UNKNOWN_OPCODE,
    ER_EXTRA_ILLEGAL_TOKENS,
    ER_EXPECTED_DOUBLE_QUOTE,
    ER_EXPECTED_SINGLE_QUOTE,
    ER_EMPTY_EXPRESSION,
    ER_EXPECTED_BUT_FOUND,
    ER_INCORRECT_PROGRAMMER_ASSERTION,
    ER_BOOLEAN_ARG_NO_LONGER_OPTIONAL,
    ER_FOUND_COMMA_BUT_NO_PRECEDING_ARG,
    ER_FOUND_COMMA_BUT_NO_FOLLOWING_ARG,
    ER_PREDICATE_ILLEGAL_SYNTAX,
    ER_ILLEGAL_AXIS_NAME,
    ER_UNKNOWN_NODETYPE,
    ER_PATTERN_LITERAL_NEEDS_BE_QUOTED,
    ER_COULDNOT_BE_FORMATTED_TO_NUMBER,
    ER_COULDNOT_CREATE_XMLPROCESSORLIAISON,
    ER_DIDNOT_FIND_XPATH_SELECT_EXP,
    ER_COULDNOT_FIND_ENDOP_AFTER_OPLOCATIONPATH,
    ER_ERROR_OCCURED,
    ER_ILLEGAL_VARIABLE_REFERENCE,
    ER_AXES_NOT_ALLOWED,
    ER_KEY_HAS_TOO_MANY_ARGS,
    ER_COUNT_TAKES_1_ARG,
    ER_COULDNOT_FIND_FUNCTION,
    ER_UNSUPPORTED_ENCODING,
    ER_PROBLEM_IN_DTM_NEXTSIBLING,
    ER_CANNOT_WRITE_TO_EMPTYNODELISTIMPL,
    ER_SETDOMFACTORY_NOT_SUPPORTED,
    ER_PREFIX_MUST_RESOLVE,
    ER_PARSE_NOT_SUPPORTED,
    ER_SAX_API_NOT_HANDLED,
    ER_IGNORABLE_WHITESPACE_NOT_HANDLED,
    ER_DTM_CANNOT_HANDLE_NODES,
    ER_XERCES_CANNOT_HANDLE_NODES,
    ER_XERCES_PARSE_ERROR_DETAILS,
    ER_XERCES_PARSE_ERROR,
    ER_INVALID_UTF16_SURROGATE,
    ER_OIERROR,
    ER_CANNOT_CREATE_URL,
    ER_XPATH_READOBJECT,
    ER_FUNCTION_TOKEN_NOT_FOUND,
    ER_CANNOT_DEAL_XPATH_TYPE,
    ER_NODESET_NOT_MUTABLE,
    ER_NODESETDTM_NOT_MUTABLE,
    ER_VAR_NOT_RESOLVABLE,
    ER_NULL_ERROR_HANDLER,
    ER_PROG_ASSERT_UNKNOWN_OPCODE,
    ER_ZERO_OR_ONE,
    ER_RTF_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER,
    ER_ASNODEITERATOR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER,
    ER_DETACH_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER,
    ER_NUM_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER,
    ER_XSTR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER,
    ER_STR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER,
    ER_FSB_NOT_SUPPORTED_XSTRINGFORCHARS,
    ER_COULD_NOT_FIND_VAR,
    ER_XSTRINGFORCHARS_CANNOT_TAKE_STRING,
    ER_FASTSTRINGBUFFER_CANNOT_BE_NULL,
    ER_TWO_OR_THREE,
    ER_VARIABLE_ACCESSED_BEFORE_BIND,
    ER_FSB_CANNOT_TAKE_STRING,
    ER_SETTING_WALKER_ROOT_TO_NULL,
    ER_NODESETDTM_CANNOT_ITERATE,
    ER_NODESET_CANNOT_ITERATE,
    ER_NODESETDTM_CANNOT_INDEX,
    ER_NODESET_CANNOT_INDEX,
    ER_CANNOT_CALL_SETSHOULDCACHENODE,
    ER_ONLY_ALLOWS,
    ER_UNKNOWN_STEP,
    ER_EXPECTED_REL_LOC_PATH,
    ER_EXPECTED_LOC_PATH,
    ER_EXPECTED_LOC_STEP,
    ER_EXPECTED_NODE_TEST,
    ER_EXPECTED_STEP_PATTERN,
    ER_EXPECTED_REL_PATH_PATTERN,
    ER_CANT_CONVERT_TO_BOOLEAN,
    ER_CANT_CONVERT_TO_SINGLENODE,
    ER_CANT_GET_SNAPSHOT_LENGTH,
    ER_NON_ITERATOR_TYPE,
    ER_DOC_MUTATED,
    ER_INVALID_XPATH_TYPE,
    ER_EMPTY_XPATH_RESULT,
    ER_INCOMPATIBLE_TYPES,
    ER_NULL_RESOLVER,
    ER_CANT_CONVERT_TO_STRING,
    ER_NON_SNAPSHOT_TYPE,
    ER_WRONG_DOCUMENT,
    ER_WRONG_NODETYPE,
    ER_XPATH_ERROR,
    ER_CANT_CONVERT_XPATHRESULTTYPE_TO_NUMBER,
    ER_EXTENSION_FUNCTION_CANNOT_BE_INVOKED,
    ER_RESOLVE_VARIABLE_RETURNS_NULL,
    ER_UNSUPPORTED_RETURN_TYPE,
    ER_SOURCE_RETURN_TYPE_CANNOT_BE_NULL,
    ER_ARG_CANNOT_BE_NULL,
    ER_OBJECT_MODEL_NULL,
    ER_OBJECT_MODEL_EMPTY,
    ER_FEATURE_NAME_NULL,
    ER_FEATURE_UNKNOWN,
    ER_GETTING_NULL_FEATURE,
    ER_GETTING_UNKNOWN_FEATURE,
    ER_NULL_XPATH_FUNCTION_RESOLVER,
    ER_NULL_XPATH_VARIABLE_RESOLVER,
];

/// Every warning key, in table order.
pub const WARNING_KEYS: &[&str] = &[
    WG_LOCALE_NAME_NOT_HANDLED,
    WG_PROPERTY_NOT_SUPPORTED,
    WG_DONT_DO_ANYTHING_WITH_NS,
    WG_SECURITY_EXCEPTION,
    WG_QUO_NO_LONGER_DEFINED,
    WG_NEED_DERIVED_OBJECT_TO_IMPLEMENT_NODETEST,
    WG_FUNCTION_TOKEN_NOT_FOUND,
    WG_COULDNOT_FIND_FUNCTION,
    WG_CANNOT_MAKE_URL_FROM,
    WG_EXPAND_ENTITIES_NOT_SUPPORTED,
    WG_ILLEGAL_VARIABLE_REFERENCE,
    WG_UNSUPPORTED_ENCODING,
];

/// UI string keys.
pub const UI_KEYS: &[&str] = &[
    UI_LANGUAGE,
    HELP_LANGUAGE,
    LANGUAGE,
    BAD_CODE,
    FORMAT_FAILED,
    VERSION,
    VERSION2,
    YES,
    LINE,
    COLUMN,
    XSLDONE,
    XPATH_OPTION,
    OPTION_IN,
    OPTION_SELECT,
    OPTION_MATCH,
    OPTION_ANY_EXPR,
    NO_PARSER_MSG1,
    NO_PARSER_MSG2,
    NO_PARSER_MSG3,
    NO_PARSER_MSG4,
    NO_PARSER_MSG5,
    GTONE,
    ZERO,
    ONE,
    TWO,
    THREE,
    ERROR_HEADER,
    WARNING_HEADER,
    XSL_HEADER,
    XML_HEADER,
    QUERY_HEADER,
];

/// `true` for keys naming a warning condition.
pub fn is_warning_key(key: &str) -> bool {
    key.starts_with("WG_")
}

/// `true` for keys naming an error condition.
pub fn is_error_key(key: &str) -> bool {
    key.starts_with("ER_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn key_lists_have_no_duplicates() {
        let mut seen = HashSet::new();
        for key in ERROR_KEYS.iter().chain(WARNING_KEYS).chain(UI_KEYS) {
            assert!(seen.insert(*key), "duplicate key constant {}", key);
        }
    }

    #[test]
    fn prefixes_classify_keys() {
        assert!(ERROR_KEYS.iter().all(|k| is_error_key(k)));
        assert!(WARNING_KEYS.iter().all(|k| is_warning_key(k)));
        assert!(!is_error_key(LINE));
        assert!(!is_warning_key(ER_UNKNOWN_AXIS));
    }
}
