// SPDX-License-Identifier: PMPL-1.0-or-later

//! English: the base catalog. Every key is defined here.

use crate::keys::*;

pub(crate) const TABLE: &[(&str, &str)] = &[
    // Errors
    (ER_CURRENT_NOT_ALLOWED_IN_MATCH, "current() not allowed in a match pattern!"),
    (ER_CURRENT_TAKES_NO_ARGS, "current() function does not accept arguments!"),
    (ER_DOCUMENT_REPLACED, "document() function implementation has been replaced by org.apache.xalan.xslt.FuncDocument!"),
    (ER_CONTEXT_HAS_NO_OWNERDOC, "context does not have an owner document!"),
    (ER_LOCALNAME_HAS_TOO_MANY_ARGS, "local-name() has too many arguments."),
    (ER_NAMESPACEURI_HAS_TOO_MANY_ARGS, "namespace-uri() has too many arguments."),
    (ER_NORMALIZESPACE_HAS_TOO_MANY_ARGS, "normalize-space() has too many arguments."),
    (ER_NUMBER_HAS_TOO_MANY_ARGS, "number() has too many arguments."),
    (ER_NAME_HAS_TOO_MANY_ARGS, "name() has too many arguments."),
    (ER_STRING_HAS_TOO_MANY_ARGS, "string() has too many arguments."),
    (ER_STRINGLENGTH_HAS_TOO_MANY_ARGS, "string-length() has too many arguments."),
    (ER_TRANSLATE_TAKES_3_ARGS, "The translate() function takes three arguments!"),
    (ER_UNPARSEDENTITYURI_TAKES_1_ARG, "The unparsed-entity-uri function should take one argument!"),
    (ER_NAMESPACEAXIS_NOT_IMPLEMENTED, "namespace axis not implemented yet!"),
    (ER_UNKNOWN_AXIS, "unknown axis: {0}"),
    (ER_UNKNOWN_MATCH_OPERATION, "unknown match operation!"),
    (ER_INCORRECT_ARG_LENGTH, "Arg length of processing-instruction() node test is incorrect!"),
    (ER_CANT_CONVERT_TO_NUMBER, "Can not convert {0} to a number"),
    (ER_CANT_CONVERT_TO_NODELIST, "Can not convert {0} to a NodeList!"),
    (ER_CANT_CONVERT_TO_MUTABLENODELIST, "Can not convert {0} to a NodeSetDTM!"),
    (ER_CANT_CONVERT_TO_TYPE, "Can not convert {0} to a type#{1}"),
    (ER_EXPECTED_MATCH_PATTERN, "Expected match pattern in getMatchScore!"),
    (ER_COULDNOT_GET_VAR_NAMED, "Could not get variable named {0}"),
    (ER_UNKNOWN_OPCODE, "ERROR! Unknown op code: {0}"),
    (ER_EXTRA_ILLEGAL_TOKENS, "Extra illegal tokens: {0}"),
    (ER_EXPECTED_DOUBLE_QUOTE, "misquoted literal... expected double quote!"),
    (ER_EXPECTED_SINGLE_QUOTE, "misquoted literal... expected single quote!"),
    (ER_EMPTY_EXPRESSION, "Empty expression!"),
    (ER_EXPECTED_BUT_FOUND, "Expected {0}, but found: {1}"),
    (ER_INCORRECT_PROGRAMMER_ASSERTION, "Programmer assertion is incorrect! - {0}"),
    (ER_BOOLEAN_ARG_NO_LONGER_OPTIONAL, "boolean(...) argument is no longer optional with 19990709 XPath draft."),
    (ER_FOUND_COMMA_BUT_NO_PRECEDING_ARG, "Found ',' but no preceding argument!"),
    (ER_FOUND_COMMA_BUT_NO_FOLLOWING_ARG, "Found ',' but no following argument!"),
    (ER_PREDICATE_ILLEGAL_SYNTAX, "'..[predicate]' or '.[predicate]' is illegal syntax.  Use 'self::node()[predicate]' instead."),
    (ER_ILLEGAL_AXIS_NAME, "illegal axis name: {0}"),
    (ER_UNKNOWN_NODETYPE, "Unknown nodetype: {0}"),
    (ER_PATTERN_LITERAL_NEEDS_BE_QUOTED, "Pattern literal ({0}) needs to be quoted!"),
    (ER_COULDNOT_BE_FORMATTED_TO_NUMBER, "{0} could not be formatted to a number!"),
    (ER_COULDNOT_CREATE_XMLPROCESSORLIAISON, "Could not create XML TransformerFactory Liaison: {0}"),
    (ER_DIDNOT_FIND_XPATH_SELECT_EXP, "Error! Did not find xpath select expression (-select)."),
    (ER_COULDNOT_FIND_ENDOP_AFTER_OPLOCATIONPATH, "ERROR! Could not find ENDOP after OP_LOCATIONPATH"),
    (ER_ERROR_OCCURED, "Error occured!"),
    (ER_ILLEGAL_VARIABLE_REFERENCE, "VariableReference given for variable out of context or without definition!  Name = {0}"),
    (ER_AXES_NOT_ALLOWED, "Only child:: and attribute:: axes are allowed in match patterns!  Offending axes = {0}"),
    (ER_KEY_HAS_TOO_MANY_ARGS, "key() has an incorrect number of arguments."),
    (ER_COUNT_TAKES_1_ARG, "The count function should take one argument!"),
    (ER_COULDNOT_FIND_FUNCTION, "Could not find function: {0}"),
    (ER_UNSUPPORTED_ENCODING, "Unsupported encoding: {0}"),
    (ER_PROBLEM_IN_DTM_NEXTSIBLING, "Problem occured in DTM in getNextSibling... trying to recover"),
    (ER_CANNOT_WRITE_TO_EMPTYNODELISTIMPL, "Programmer error: EmptyNodeList can not be written to."),
    (ER_SETDOMFACTORY_NOT_SUPPORTED, "setDOMFactory is not supported by XPathContext!"),
    (ER_PREFIX_MUST_RESOLVE, "Prefix must resolve to a namespace: {0}"),
    (ER_PARSE_NOT_SUPPORTED, "parse (InputSource source) not supported in XPathContext! Can not open {0}"),
    (ER_SAX_API_NOT_HANDLED, "SAX API characters(char ch[]... not handled by the DTM!"),
    (ER_IGNORABLE_WHITESPACE_NOT_HANDLED, "ignorableWhitespace(char ch[]... not handled by the DTM!"),
    (ER_DTM_CANNOT_HANDLE_NODES, "DTMLiaison can not handle nodes of type {0}"),
    (ER_XERCES_CANNOT_HANDLE_NODES, "DOM2Helper can not handle nodes of type {0}"),
    (ER_XERCES_PARSE_ERROR_DETAILS, "DOM2Helper.parse error: SystemID - {0} line - {1}"),
    (ER_XERCES_PARSE_ERROR, "DOM2Helper.parse error"),
    (ER_INVALID_UTF16_SURROGATE, "Invalid UTF-16 surrogate detected: {0} ?"),
    (ER_OIERROR, "IO error"),
    (ER_CANNOT_CREATE_URL, "Cannot create url for: {0}"),
    (ER_XPATH_READOBJECT, "In XPath.readObject: {0}"),
    (ER_FUNCTION_TOKEN_NOT_FOUND, "function token not found."),
    (ER_CANNOT_DEAL_XPATH_TYPE, "Can not deal with XPath type: {0}"),
    (ER_NODESET_NOT_MUTABLE, "This NodeSet is not mutable"),
    (ER_NODESETDTM_NOT_MUTABLE, "This NodeSetDTM is not mutable"),
    (ER_VAR_NOT_RESOLVABLE, "Variable not resolvable: {0}"),
    (ER_NULL_ERROR_HANDLER, "Null error handler"),
    (ER_PROG_ASSERT_UNKNOWN_OPCODE, "Programmer''s assertion: unknown opcode: {0}"),
    (ER_ZERO_OR_ONE, "0 or 1"),
    (ER_RTF_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "rtf() not supported by XRTreeFragSelectWrapper"),
    (ER_ASNODEITERATOR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "asNodeIterator() not supported by XRTreeFragSelectWrapper"),
    (ER_DETACH_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "detach() not supported by XRTreeFragSelectWrapper"),
    (ER_NUM_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "num() not supported by XRTreeFragSelectWrapper"),
    (ER_XSTR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "xstr() not supported by XRTreeFragSelectWrapper"),
    (ER_STR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "str() not supported by XRTreeFragSelectWrapper"),
    (ER_FSB_NOT_SUPPORTED_XSTRINGFORCHARS, "fsb() not supported for XStringForChars"),
    (ER_COULD_NOT_FIND_VAR, "Could not find variable with the name of {0}"),
    (ER_XSTRINGFORCHARS_CANNOT_TAKE_STRING, "XStringForChars can not take a string for an argument"),
    (ER_FASTSTRINGBUFFER_CANNOT_BE_NULL, "The FastStringBuffer argument can not be null"),
    (ER_TWO_OR_THREE, "2 or 3"),
    (ER_VARIABLE_ACCESSED_BEFORE_BIND, "Variable accessed before it is bound!"),
    (ER_FSB_CANNOT_TAKE_STRING, "XStringForFSB can not take a string for an argument!"),
    (ER_SETTING_WALKER_ROOT_TO_NULL, "\n !!!! Error! Setting the root of a walker to null!!!"),
    (ER_NODESETDTM_CANNOT_ITERATE, "This NodeSetDTM can not iterate to a previous node!"),
    (ER_NODESET_CANNOT_ITERATE, "This NodeSet can not iterate to a previous node!"),
    (ER_NODESETDTM_CANNOT_INDEX, "This NodeSetDTM can not do indexing or counting functions!"),
    (ER_NODESET_CANNOT_INDEX, "This NodeSet can not do indexing or counting functions!"),
    (ER_CANNOT_CALL_SETSHOULDCACHENODE, "Can not call setShouldCacheNodes after nextNode has been called!"),
    (ER_ONLY_ALLOWS, "{0} only allows {1} arguments"),
    (ER_UNKNOWN_STEP, "Programmer''s assertion in getNextStepPos: unknown stepType: {0}"),
    (ER_EXPECTED_REL_LOC_PATH, "A relative location path was expected following the '/' or '//' token."),
    (ER_EXPECTED_LOC_PATH, "A location path was expected, but the end of the XPath expression was found instead."),
    (ER_EXPECTED_LOC_STEP, "A location step was expected following the '/' or '//' token."),
    (ER_EXPECTED_NODE_TEST, "A node test that matches either NCName:* or QName was expected."),
    (ER_EXPECTED_STEP_PATTERN, "A step pattern was expected, but '/' was encountered."),
    (ER_EXPECTED_REL_PATH_PATTERN, "A relative path pattern was expected."),
    (ER_CANT_CONVERT_TO_BOOLEAN, "The XPathResult of XPath expression ''{0}'' has an XPathResultType of {1} which cannot be converted to a boolean."),
    (ER_CANT_CONVERT_TO_SINGLENODE, "The XPathResult of XPath expression ''{0}'' has an XPathResultType of {1} which cannot be converted to a single node. The method getSingleNodeValue applies only to types ANY_UNORDERED_NODE_TYPE and FIRST_ORDERED_NODE_TYPE."),
    (ER_CANT_GET_SNAPSHOT_LENGTH, "The method getSnapshotLength cannot be called on the XPathResult of XPath expression ''{0}'' because its XPathResultType is {1}. This method applies only to types UNORDERED_NODE_SNAPSHOT_TYPE and ORDERED_NODE_SNAPSHOT_TYPE."),
    (ER_NON_ITERATOR_TYPE, "The method iterateNext cannot be called on the XPathResult of XPath expression ''{0}'' because its XPathResultType is {1}. This method applies only to types UNORDERED_NODE_ITERATOR_TYPE and ORDERED_NODE_ITERATOR_TYPE."),
    (ER_DOC_MUTATED, "Document mutated since result was returned. Iterator is invalid."),
    (ER_INVALID_XPATH_TYPE, "Invalid XPath type argument: {0}"),
    (ER_EMPTY_XPATH_RESULT, "Empty XPath result object"),
    (ER_INCOMPATIBLE_TYPES, "The XPathResult of XPath expression ''{0}'' has an XPathResultType of {1} which cannot be coerced into the specified XPathResultType of {2}."),
    (ER_NULL_RESOLVER, "Unable to resolve prefix with null prefix resolver."),
    (ER_CANT_CONVERT_TO_STRING, "The XPathResult of XPath expression ''{0}'' has an XPathResultType of {1} which cannot be converted to a string."),
    (ER_NON_SNAPSHOT_TYPE, "The method snapshotItem cannot be called on the XPathResult of XPath expression ''{0}'' because its XPathResultType is {1}. This method applies only to types UNORDERED_NODE_SNAPSHOT_TYPE and ORDERED_NODE_SNAPSHOT_TYPE."),
    (ER_WRONG_DOCUMENT, "Context node does not belong to the document that is bound to this XPathEvaluator."),
    (ER_WRONG_NODETYPE, "The context node type is not supported."),
    (ER_XPATH_ERROR, "Unknown error in XPath."),
    (ER_CANT_CONVERT_XPATHRESULTTYPE_TO_NUMBER, "The XPathResult of XPath expression ''{0}'' has an XPathResultType of {1} which cannot be converted to a number"),
    (ER_EXTENSION_FUNCTION_CANNOT_BE_INVOKED, "Extension function: ''{0}'' can not be invoked when XMLConstants.FEATURE_SECURE_PROCESSING feature is set to true."),
    (ER_RESOLVE_VARIABLE_RETURNS_NULL, "resolveVariable for variable {0} returning null"),
    (ER_UNSUPPORTED_RETURN_TYPE, "UnSupported Return Type : {0}"),
    (ER_SOURCE_RETURN_TYPE_CANNOT_BE_NULL, "Source and/or Return Type can not be null"),
    (ER_ARG_CANNOT_BE_NULL, "The {0} argument can not be null"),
    (ER_OBJECT_MODEL_NULL, "{0}#isObjectModelSupported( String objectModel ) cannot be called with objectModel == null"),
    (ER_OBJECT_MODEL_EMPTY, "{0}#isObjectModelSupported( String objectModel ) cannot be called with objectModel == \"\""),
    (ER_FEATURE_NAME_NULL, "Trying to set a feature with a null name: {0}#setFeature( null, {1})"),
    (ER_FEATURE_UNKNOWN, "Trying to set the unknown feature \"{0}\":{1}#setFeature({0},{2})"),
    (ER_GETTING_NULL_FEATURE, "Trying to get a feature with a null name: {0}#getFeature(null)"),
    (ER_GETTING_UNKNOWN_FEATURE, "Trying to get the unknown feature \"{0}\":{1}#getFeature({0})"),
    (ER_NULL_XPATH_FUNCTION_RESOLVER, "Attempting to set a null XPathFunctionResolver:{0}#setXPathFunctionResolver(null)"),
    (ER_NULL_XPATH_VARIABLE_RESOLVER, "Attempting to set a null XPathVariableResolver:{0}#setXPathVariableResolver(null)"),
    // Warnings
    (WG_LOCALE_NAME_NOT_HANDLED, "locale name in the format-number function not yet handled!"),
    (WG_PROPERTY_NOT_SUPPORTED, "XSL Property not supported: {0}"),
    (WG_DONT_DO_ANYTHING_WITH_NS, "Do not currently do anything with namespace {0} in property: {1}"),
    (WG_SECURITY_EXCEPTION, "SecurityException when trying to access XSL system property: {0}"),
    (WG_QUO_NO_LONGER_DEFINED, "Old syntax: quo(...) is no longer defined in XPath."),
    (WG_NEED_DERIVED_OBJECT_TO_IMPLEMENT_NODETEST, "XPath needs a derived object to implement nodeTest!"),
    (WG_FUNCTION_TOKEN_NOT_FOUND, "function token not found."),
    (WG_COULDNOT_FIND_FUNCTION, "Could not find function: {0}"),
    (WG_CANNOT_MAKE_URL_FROM, "Can not make URL from: {0}"),
    (WG_EXPAND_ENTITIES_NOT_SUPPORTED, "-E option not supported for DTM parser"),
    (WG_ILLEGAL_VARIABLE_REFERENCE, "VariableReference given for variable out of context or without definition!  Name = {0}"),
    (WG_UNSUPPORTED_ENCODING, "Unsupported encoding: {0}"),
    // UI strings
    (UI_LANGUAGE, "en"),
    (HELP_LANGUAGE, "en"),
    (LANGUAGE, "en"),
    (BAD_CODE, "Parameter to createMessage was out of bounds"),
    (FORMAT_FAILED, "Exception thrown during messageFormat call"),
    (VERSION, ">>>>>>> Xalan Version "),
    (VERSION2, "<<<<<<<"),
    (YES, "yes"),
    (LINE, "Line #"),
    (COLUMN, "Column #"),
    (XSLDONE, "XSLProcessor: done"),
    (XPATH_OPTION, "xpath options: "),
    (OPTION_IN, "   [-in inputXMLURL]"),
    (OPTION_SELECT, "   [-select xpath expression]"),
    (OPTION_MATCH, "   [-match match pattern (for match diagnostics)]"),
    (OPTION_ANY_EXPR, "Or just an xpath expression will do a diagnostic dump"),
    (NO_PARSER_MSG1, "XSL Process was not successful."),
    (NO_PARSER_MSG2, "** Could not find parser **"),
    (NO_PARSER_MSG3, "Please check your classpath."),
    (NO_PARSER_MSG4, "If you don't have IBM's XML Parser for Java, you can download it from"),
    (NO_PARSER_MSG5, "IBM's AlphaWorks: http://www.alphaworks.ibm.com/formula/xml"),
    (GTONE, ">1"),
    (ZERO, "0"),
    (ONE, "1"),
    (TWO, "2"),
    (THREE, "3"),
    (ERROR_HEADER, "Error: "),
    (WARNING_HEADER, "Warning: "),
    (XSL_HEADER, "XSL "),
    (XML_HEADER, "XML "),
    (QUERY_HEADER, "PATTERN "),
];
