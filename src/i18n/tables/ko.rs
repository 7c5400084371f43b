// SPDX-License-Identifier: PMPL-1.0-or-later

//! Korean.

use crate::keys::*;

pub(crate) const TABLE: &[(&str, &str)] = &[
    // Errors
    (ER_CURRENT_NOT_ALLOWED_IN_MATCH, "current() 함수는 일치 패턴에서 사용할 수 없습니다."),
    (ER_CURRENT_TAKES_NO_ARGS, "current() 함수는 인수를 받지 않습니다."),
    (ER_DOCUMENT_REPLACED, "document() 함수 구현이 org.apache.xalan.xslt.FuncDocument로 대체되었습니다."),
    (ER_CONTEXT_HAS_NO_OWNERDOC, "컨텍스트에 소유자 문서가 없습니다."),
    (ER_LOCALNAME_HAS_TOO_MANY_ARGS, "local-name()에 인수가 너무 많습니다."),
    (ER_NAMESPACEURI_HAS_TOO_MANY_ARGS, "namespace-uri()에 인수가 너무 많습니다."),
    (ER_NORMALIZESPACE_HAS_TOO_MANY_ARGS, "normalize-space()에 인수가 너무 많습니다."),
    (ER_NUMBER_HAS_TOO_MANY_ARGS, "number()에 인수가 너무 많습니다."),
    (ER_NAME_HAS_TOO_MANY_ARGS, "name()에 인수가 너무 많습니다."),
    (ER_STRING_HAS_TOO_MANY_ARGS, "string()에 인수가 너무 많습니다."),
    (ER_STRINGLENGTH_HAS_TOO_MANY_ARGS, "string-length()에 인수가 너무 많습니다."),
    (ER_TRANSLATE_TAKES_3_ARGS, "translate() 함수에는 세 개의 인수가 필요합니다."),
    (ER_UNPARSEDENTITYURI_TAKES_1_ARG, "unparsed-entity-uri 함수에는 한 개의 인수가 필요합니다."),
    (ER_NAMESPACEAXIS_NOT_IMPLEMENTED, "네임스페이스 축은 아직 구현되지 않았습니다."),
    (ER_UNKNOWN_AXIS, "알 수 없는 축: {0}"),
    (ER_UNKNOWN_MATCH_OPERATION, "알 수 없는 일치 조작입니다."),
    (ER_INCORRECT_ARG_LENGTH, "processing-instruction() 노드 테스트의 인수 길이가 올바르지 않습니다."),
    (ER_CANT_CONVERT_TO_NUMBER, "{0}을(를) 숫자로 변환할 수 없습니다."),
    (ER_CANT_CONVERT_TO_NODELIST, "{0}을(를) NodeList로 변환할 수 없습니다."),
    (ER_CANT_CONVERT_TO_MUTABLENODELIST, "{0}을(를) NodeSetDTM으로 변환할 수 없습니다."),
    (ER_CANT_CONVERT_TO_TYPE, "{0}을(를) type#{1}(으)로 변환할 수 없습니다."),
    (ER_EXPECTED_MATCH_PATTERN, "getMatchScore에 일치 패턴이 필요합니다."),
    (ER_COULDNOT_GET_VAR_NAMED, "이름이 {0}인 변수를 가져올 수 없습니다."),
    (ER_UNKNOWN_OPCODE, "오류: 알 수 없는 조작 코드: {0}"),
    (ER_EXTRA_ILLEGAL_TOKENS, "추가로 사용할 수 없는 토큰: {0}"),
    (ER_EXPECTED_DOUBLE_QUOTE, "리터럴의 따옴표가 잘못되었습니다... 큰따옴표가 필요합니다."),
    (ER_EXPECTED_SINGLE_QUOTE, "리터럴의 따옴표가 잘못되었습니다... 작은따옴표가 필요합니다."),
    (ER_EMPTY_EXPRESSION, "표현식이 비어 있습니다."),
    (ER_EXPECTED_BUT_FOUND, "{0}이(가) 필요하지만 {1}이(가) 발견되었습니다."),
    (ER_INCORRECT_PROGRAMMER_ASSERTION, "프로그래머 단언문이 올바르지 않습니다. - {0}"),
    (ER_BOOLEAN_ARG_NO_LONGER_OPTIONAL, "19990709 XPath 초안에서 boolean(...) 인수는 더 이상 선택적이지 않습니다."),
    (ER_FOUND_COMMA_BUT_NO_PRECEDING_ARG, "','가 발견되었지만 선행 인수가 없습니다."),
    (ER_FOUND_COMMA_BUT_NO_FOLLOWING_ARG, "','가 발견되었지만 후행 인수가 없습니다."),
    (ER_PREDICATE_ILLEGAL_SYNTAX, "'..[predicate]' 또는 '.[predicate]'는 잘못된 구문입니다. 대신 'self::node()[predicate]'를 사용하십시오."),
    (ER_ILLEGAL_AXIS_NAME, "잘못된 축 이름: {0}"),
    (ER_UNKNOWN_NODETYPE, "알 수 없는 노드 유형: {0}"),
    (ER_PATTERN_LITERAL_NEEDS_BE_QUOTED, "패턴 리터럴({0})은 따옴표로 묶어야 합니다."),
    (ER_COULDNOT_BE_FORMATTED_TO_NUMBER, "{0}을(를) 숫자로 형식화할 수 없습니다."),
    (ER_COULDNOT_CREATE_XMLPROCESSORLIAISON, "XML TransformerFactory Liaison을 작성할 수 없습니다: {0}"),
    (ER_DIDNOT_FIND_XPATH_SELECT_EXP, "오류: xpath 선택 표현식(-select)을 찾을 수 없습니다."),
    (ER_COULDNOT_FIND_ENDOP_AFTER_OPLOCATIONPATH, "오류: OP_LOCATIONPATH 다음에 ENDOP를 찾을 수 없습니다."),
    (ER_ERROR_OCCURED, "오류가 발생했습니다."),
    (ER_ILLEGAL_VARIABLE_REFERENCE, "컨텍스트를 벗어나거나 정의되지 않은 변수에 VariableReference가 지정되었습니다. 이름 = {0}"),
    (ER_AXES_NOT_ALLOWED, "일치 패턴에서는 child:: 및 attribute:: 축만 사용할 수 있습니다. 잘못된 축 = {0}"),
    (ER_KEY_HAS_TOO_MANY_ARGS, "key()의 인수 개수가 올바르지 않습니다."),
    (ER_COUNT_TAKES_1_ARG, "count 함수에는 한 개의 인수가 필요합니다."),
    (ER_COULDNOT_FIND_FUNCTION, "함수를 찾을 수 없습니다: {0}"),
    (ER_UNSUPPORTED_ENCODING, "지원되지 않는 인코딩: {0}"),
    (ER_PROBLEM_IN_DTM_NEXTSIBLING, "getNextSibling에서 DTM에 문제가 발생했습니다... 복구를 시도합니다."),
    (ER_CANNOT_WRITE_TO_EMPTYNODELISTIMPL, "프로그래머 오류: EmptyNodeList에 쓸 수 없습니다."),
    (ER_SETDOMFACTORY_NOT_SUPPORTED, "XPathContext에서는 setDOMFactory를 지원하지 않습니다."),
    (ER_PREFIX_MUST_RESOLVE, "접두부는 네임스페이스로 해석되어야 합니다: {0}"),
    (ER_PARSE_NOT_SUPPORTED, "XPathContext에서는 parse(InputSource source)를 지원하지 않습니다. {0}을(를) 열 수 없습니다."),
    (ER_SAX_API_NOT_HANDLED, "SAX API characters(char ch[]...는 DTM에서 처리되지 않습니다."),
    (ER_IGNORABLE_WHITESPACE_NOT_HANDLED, "ignorableWhitespace(char ch[]...는 DTM에서 처리되지 않습니다."),
    (ER_DTM_CANNOT_HANDLE_NODES, "DTMLiaison은 {0} 유형의 노드를 처리할 수 없습니다."),
    (ER_XERCES_CANNOT_HANDLE_NODES, "DOM2Helper는 {0} 유형의 노드를 처리할 수 없습니다."),
    (ER_XERCES_PARSE_ERROR_DETAILS, "DOM2Helper.parse 오류: SystemID - {0} 행 - {1}"),
    (ER_XERCES_PARSE_ERROR, "DOM2Helper.parse 오류"),
    (ER_INVALID_UTF16_SURROGATE, "잘못된 UTF-16 대리자가 발견되었습니다: {0} ?"),
    (ER_OIERROR, "입출력 오류"),
    (ER_CANNOT_CREATE_URL, "{0}에 대한 URL을 작성할 수 없습니다."),
    (ER_XPATH_READOBJECT, "XPath.readObject에서: {0}"),
    (ER_FUNCTION_TOKEN_NOT_FOUND, "함수 토큰을 찾을 수 없습니다."),
    (ER_CANNOT_DEAL_XPATH_TYPE, "XPath 유형을 처리할 수 없습니다: {0}"),
    (ER_NODESET_NOT_MUTABLE, "이 NodeSet은 변경할 수 없습니다."),
    (ER_NODESETDTM_NOT_MUTABLE, "이 NodeSetDTM은 변경할 수 없습니다."),
    (ER_VAR_NOT_RESOLVABLE, "변수를 해석할 수 없습니다: {0}"),
    (ER_NULL_ERROR_HANDLER, "오류 핸들러가 널입니다."),
    (ER_PROG_ASSERT_UNKNOWN_OPCODE, "프로그래머 단언문: 알 수 없는 조작 코드: {0}"),
    (ER_ZERO_OR_ONE, "0 또는 1"),
    (ER_RTF_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "XRTreeFragSelectWrapper에서는 rtf()를 지원하지 않습니다."),
    (ER_RTF_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "XRTreeFragSelectWrapper에서는 asNodeIterator()를 지원하지 않습니다."),
    (ER_DETACH_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "XRTreeFragSelectWrapper에서는 detach()를 지원하지 않습니다."),
    (ER_NUM_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "XRTreeFragSelectWrapper에서는 num()을 지원하지 않습니다."),
    (ER_XSTR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "XRTreeFragSelectWrapper에서는 xstr()을 지원하지 않습니다."),
    (ER_STR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "XRTreeFragSelectWrapper에서는 str()을 지원하지 않습니다."),
    (ER_FSB_NOT_SUPPORTED_XSTRINGFORCHARS, "XStringForChars에서는 fsb()를 지원하지 않습니다."),
    (ER_COULD_NOT_FIND_VAR, "이름이 {0}인 변수를 찾을 수 없습니다."),
    (ER_XSTRINGFORCHARS_CANNOT_TAKE_STRING, "XStringForChars는 문자열을 인수로 사용할 수 없습니다."),
    (ER_FASTSTRINGBUFFER_CANNOT_BE_NULL, "FastStringBuffer 인수는 널일 수 없습니다."),
    (ER_TWO_OR_THREE, "2 또는 3"),
    (ER_VARIABLE_ACCESSED_BEFORE_BIND, "변수가 바인드되기 전에 액세스되었습니다."),
    (ER_FSB_CANNOT_TAKE_STRING, "XStringForFSB는 문자열을 인수로 사용할 수 없습니다."),
    (ER_SETTING_WALKER_ROOT_TO_NULL, "\n !!!! 오류: walker의 루트를 널로 설정하고 있습니다!!!"),
    (ER_NODESETDTM_CANNOT_ITERATE, "이 NodeSetDTM은 이전 노드로 반복할 수 없습니다."),
    (ER_NODESET_CANNOT_ITERATE, "이 NodeSet은 이전 노드로 반복할 수 없습니다."),
    (ER_NODESETDTM_CANNOT_INDEX, "이 NodeSetDTM은 색인화 또는 계수 기능을 수행할 수 없습니다."),
    (ER_NODESET_CANNOT_INDEX, "이 NodeSet은 색인화 또는 계수 기능을 수행할 수 없습니다."),
    (ER_CANNOT_CALL_SETSHOULDCACHENODE, "nextNode를 호출한 다음에는 setShouldCacheNodes를 호출할 수 없습니다."),
    (ER_ONLY_ALLOWS, "{0}에는 {1}개의 인수만 사용할 수 있습니다."),
    (ER_UNKNOWN_STEP, "getNextStepPos의 프로그래머 단언문: 알 수 없는 stepType: {0}"),
    (ER_EXPECTED_REL_LOC_PATH, "'/' 또는 '//' 토큰 다음에는 상대 위치 경로가 필요합니다."),
    (ER_EXPECTED_LOC_PATH, "위치 경로가 필요하지만 대신 XPath 표현식의 끝이 발견되었습니다."),
    (ER_EXPECTED_LOC_STEP, "'/' 또는 '//' 토큰 다음에는 위치 단계가 필요합니다."),
    (ER_EXPECTED_NODE_TEST, "NCName:* 또는 QName과 일치하는 노드 테스트가 필요합니다."),
    (ER_EXPECTED_STEP_PATTERN, "단계 패턴이 필요하지만 '/'가 발견되었습니다."),
    (ER_EXPECTED_REL_PATH_PATTERN, "상대 경로 패턴이 필요합니다."),
    (ER_CANT_CONVERT_TO_BOOLEAN, "XPath 표현식 ''{0}''의 XPathResult에 부울로 변환할 수 없는 XPathResultType {1}이(가) 있습니다."),
    (ER_CANT_CONVERT_TO_SINGLENODE, "XPath 표현식 ''{0}''의 XPathResult에 단일 노드로 변환할 수 없는 XPathResultType {1}이(가) 있습니다. getSingleNodeValue 메소드는 ANY_UNORDERED_NODE_TYPE 및 FIRST_ORDERED_NODE_TYPE 유형에만 적용됩니다."),
    (ER_CANT_GET_SNAPSHOT_LENGTH, "XPathResultType이 {1}이므로 XPath 표현식 ''{0}''의 XPathResult에서 getSnapshotLength 메소드를 호출할 수 없습니다. 이 메소드는 UNORDERED_NODE_SNAPSHOT_TYPE 및 ORDERED_NODE_SNAPSHOT_TYPE 유형에만 적용됩니다."),
    (ER_NON_ITERATOR_TYPE, "XPathResultType이 {1}이므로 XPath 표현식 ''{0}''의 XPathResult에서 iterateNext 메소드를 호출할 수 없습니다. 이 메소드는 UNORDERED_NODE_ITERATOR_TYPE 및 ORDERED_NODE_ITERATOR_TYPE 유형에만 적용됩니다."),
    (ER_DOC_MUTATED, "결과가 리턴된 후 문서가 변경되었습니다. 반복자가 올바르지 않습니다."),
    (ER_INVALID_XPATH_TYPE, "잘못된 XPath 유형 인수: {0}"),
    (ER_EMPTY_XPATH_RESULT, "비어 있는 XPath 결과 오브젝트"),
    (ER_INCOMPATIBLE_TYPES, "XPath 표현식 ''{0}''의 XPathResult에 지정된 XPathResultType {2}(으)로 강제 변환할 수 없는 XPathResultType {1}이(가) 있습니다."),
    (ER_NULL_RESOLVER, "널 접두부 해석기로는 접두부를 해석할 수 없습니다."),
    (ER_CANT_CONVERT_TO_STRING, "XPath 표현식 ''{0}''의 XPathResult에 문자열로 변환할 수 없는 XPathResultType {1}이(가) 있습니다."),
    (ER_NON_SNAPSHOT_TYPE, "XPathResultType이 {1}이므로 XPath 표현식 ''{0}''의 XPathResult에서 snapshotItem 메소드를 호출할 수 없습니다. 이 메소드는 UNORDERED_NODE_SNAPSHOT_TYPE 및 ORDERED_NODE_SNAPSHOT_TYPE 유형에만 적용됩니다."),
    (ER_WRONG_DOCUMENT, "컨텍스트 노드가 이 XPathEvaluator에 바인드된 문서에 속하지 않습니다."),
    (ER_WRONG_NODETYPE, "컨텍스트 노드 유형이 지원되지 않습니다."),
    (ER_XPATH_ERROR, "XPath에 알 수 없는 오류가 있습니다."),
    (ER_CANT_CONVERT_XPATHRESULTTYPE_TO_NUMBER, "XPath 표현식 ''{0}''의 XPathResult에 숫자로 변환할 수 없는 XPathResultType {1}이(가) 있습니다."),
    (ER_EXTENSION_FUNCTION_CANNOT_BE_INVOKED, "XMLConstants.FEATURE_SECURE_PROCESSING 기능이 true로 설정되어 있으면 확장 함수 ''{0}''을(를) 호출할 수 없습니다."),
    (ER_RESOLVE_VARIABLE_RETURNS_NULL, "변수 {0}에 대한 resolveVariable이 널을 리턴합니다."),
    (ER_UNSUPPORTED_RETURN_TYPE, "지원되지 않는 리턴 유형: {0}"),
    (ER_SOURCE_RETURN_TYPE_CANNOT_BE_NULL, "소스 및/또는 리턴 유형은 널일 수 없습니다."),
    (ER_ARG_CANNOT_BE_NULL, "{0} 인수는 널일 수 없습니다."),
    (ER_OBJECT_MODEL_NULL, "{0}#isObjectModelSupported( String objectModel )는 objectModel == null로 호출할 수 없습니다."),
    (ER_OBJECT_MODEL_EMPTY, "{0}#isObjectModelSupported( String objectModel )는 objectModel == \"\"로 호출할 수 없습니다."),
    (ER_FEATURE_NAME_NULL, "널 이름으로 기능을 설정하려고 했습니다: {0}#setFeature( null, {1})"),
    (ER_FEATURE_UNKNOWN, "알 수 없는 기능 \"{0}\"을(를) 설정하려고 했습니다:{1}#setFeature({0},{2})"),
    (ER_GETTING_NULL_FEATURE, "널 이름으로 기능을 가져오려고 했습니다: {0}#getFeature(null)"),
    (ER_GETTING_UNKNOWN_FEATURE, "알 수 없는 기능 \"{0}\"을(를) 가져오려고 했습니다:{1}#getFeature({0})"),
    (ER_NULL_XPATH_FUNCTION_RESOLVER, "널 XPathFunctionResolver를 설정하려고 했습니다:{0}#setXPathFunctionResolver(null)"),
    (ER_NULL_XPATH_VARIABLE_RESOLVER, "널 XPathVariableResolver를 설정하려고 했습니다:{0}#setXPathVariableResolver(null)"),
    // Warnings
    (WG_LOCALE_NAME_NOT_HANDLED, "format-number 함수의 로케일 이름은 아직 처리되지 않습니다."),
    (WG_PROPERTY_NOT_SUPPORTED, "XSL 특성이 지원되지 않습니다: {0}"),
    (WG_DONT_DO_ANYTHING_WITH_NS, "현재 특성 {1}의 네임스페이스 {0}에 대해서는 아무 작업도 수행하지 않습니다."),
    (WG_SECURITY_EXCEPTION, "XSL 시스템 특성에 액세스하는 중 SecurityException이 발생했습니다: {0}"),
    (WG_QUO_NO_LONGER_DEFINED, "이전 구문: quo(...)는 XPath에서 더 이상 정의되지 않습니다."),
    (WG_NEED_DERIVED_OBJECT_TO_IMPLEMENT_NODETEST, "XPath에서 nodeTest를 구현하려면 파생 오브젝트가 필요합니다."),
    (WG_FUNCTION_TOKEN_NOT_FOUND, "함수 토큰을 찾을 수 없습니다."),
    (WG_COULDNOT_FIND_FUNCTION, "함수를 찾을 수 없습니다: {0}"),
    (WG_CANNOT_MAKE_URL_FROM, "{0}에서 URL을 작성할 수 없습니다."),
    (WG_EXPAND_ENTITIES_NOT_SUPPORTED, "DTM 구문 분석기에서는 -E 옵션을 지원하지 않습니다."),
    (WG_ILLEGAL_VARIABLE_REFERENCE, "컨텍스트를 벗어나거나 정의되지 않은 변수에 VariableReference가 지정되었습니다. 이름 = {0}"),
    (WG_UNSUPPORTED_ENCODING, "지원되지 않는 인코딩: {0}"),
    // UI strings
    (UI_LANGUAGE, "ko"),
    (HELP_LANGUAGE, "ko"),
    (LANGUAGE, "ko"),
    (BAD_CODE, "createMessage의 매개변수가 범위를 벗어났습니다."),
    (FORMAT_FAILED, "messageFormat 호출 중 예외가 발생했습니다."),
    (VERSION, ">>>>>>> Xalan 버전 "),
    (VERSION2, "<<<<<<<"),
    (YES, "예"),
    (LINE, "행 번호"),
    (COLUMN, "열 번호"),
    (XSLDONE, "XSLProcessor: 완료"),
    (XPATH_OPTION, "xpath 옵션: "),
    (OPTION_IN, "   [-in inputXMLURL]"),
    (OPTION_SELECT, "   [-select xpath 표현식]"),
    (OPTION_MATCH, "   [-match 일치 패턴 (일치 진단용)]"),
    (OPTION_ANY_EXPR, "또는 xpath 표현식만 지정하면 진단 덤프를 수행합니다."),
    (NO_PARSER_MSG1, "XSL 프로세스가 실패했습니다."),
    (NO_PARSER_MSG2, "** 구문 분석기를 찾을 수 없습니다. **"),
    (NO_PARSER_MSG3, "클래스 경로를 확인하십시오."),
    (NO_PARSER_MSG4, "IBM XML Parser for Java가 없으면 다음 위치에서 다운로드할 수 있습니다."),
    (NO_PARSER_MSG5, "IBM AlphaWorks: http://www.alphaworks.ibm.com/formula/xml"),
    (GTONE, ">1"),
    (ZERO, "0"),
    (ONE, "1"),
    (TWO, "2"),
    (THREE, "3"),
    (ERROR_HEADER, "오류: "),
    (WARNING_HEADER, "경고: "),
    (XSL_HEADER, "XSL "),
    (XML_HEADER, "XML "),
    (QUERY_HEADER, "패턴 "),
];
